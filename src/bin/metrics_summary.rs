// ABOUTME: Prints a daily metrics table and aggregate averages for a metrics dataset
// ABOUTME: Reads a JSON dataset file, or the built-in sample week when none is given
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily metrics summary report.
//!
//! Usage:
//! ```bash
//! # Summarize the built-in sample week
//! cargo run --bin metrics-summary
//!
//! # Summarize a generated dataset
//! cargo run --bin metrics-summary -- garmin_data_api.json
//! ```

use anyhow::Result;
use clap::Parser;
use recovery_score_api::{
    logging,
    metrics::{render_report, MetricsDataset},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "metrics-summary", about = "Summarize daily fitness metrics")]
struct SummaryArgs {
    /// JSON metrics file (defaults to the built-in sample week)
    file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = SummaryArgs::parse();
    logging::init_for_cli(args.verbose)?;

    let dataset = match &args.file {
        Some(path) => MetricsDataset::load(path)?,
        None => MetricsDataset::sample(),
    };

    print!("{}", render_report(&dataset));

    Ok(())
}
