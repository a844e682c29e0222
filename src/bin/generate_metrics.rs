// ABOUTME: Generates a random daily fitness metrics dataset and writes it as JSON
// ABOUTME: Produces files the server can load through METRICS_DATA_PATH or --data-file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Random metrics dataset generator.
//!
//! Usage:
//! ```bash
//! # Default range 2023-01-01 through 2023-03-01 into garmin_data_api.json
//! cargo run --bin generate-metrics
//!
//! # Reproducible output for a custom range
//! cargo run --bin generate-metrics -- --start 2024-05-01 --end 2024-05-31 --seed 42
//!
//! # Write only, without echoing the JSON
//! cargo run --bin generate-metrics -- --output data.json --quiet
//! ```

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use recovery_core::constants::generation::{DEFAULT_END_DATE, DEFAULT_START_DATE};
use recovery_score_api::{logging, metrics::MetricsGenerator};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "generate-metrics",
    about = "Generate random daily fitness metrics",
    long_about = "Generate one random metrics record per day for an inclusive date range and save it as JSON"
)]
struct GenerateArgs {
    /// Output JSON file
    #[arg(long, short, default_value = "garmin_data_api.json")]
    output: PathBuf,

    /// First date (YYYY-MM-DD)
    #[arg(long, default_value = DEFAULT_START_DATE)]
    start: NaiveDate,

    /// Last date, inclusive (YYYY-MM-DD)
    #[arg(long, default_value = DEFAULT_END_DATE)]
    end: NaiveDate,

    /// Random seed for reproducible data (optional)
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print the generated JSON
    #[arg(long, short)]
    quiet: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = GenerateArgs::parse();
    logging::init_for_cli(args.verbose)?;

    let dataset = MetricsGenerator::new(args.seed).generate(args.start, args.end)?;
    dataset.save(&args.output)?;
    info!(days = dataset.len(), output = %args.output.display(), "Metrics dataset written");

    if !args.quiet {
        println!("{}", dataset.to_json_pretty()?);
    }

    Ok(())
}
