// ABOUTME: HTTP server binary for the recovery score API and metrics dashboard
// ABOUTME: Reads configuration from the environment, with command line overrides for port and data file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recovery Score API Server Binary
//!
//! Starts the HTTP server on `HTTP_PORT` (default 8000), falling back to
//! `HTTP_FALLBACK_PORT` (default 8001) when the port is already taken.

use anyhow::Result;
use clap::Parser;
use recovery_score_api::{
    config::ServerConfig, logging, resources::ServerResources, routes::ApiInfo, server,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recovery-score-api")]
#[command(about = "Recovery Score API - training status decisions and daily fitness metrics")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// JSON metrics file to serve instead of the built-in sample
    #[arg(long)]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(data_file) = args.data_file {
        config.data_path = Some(data_file);
    }

    info!("Starting Recovery Score API");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config)?);
    display_available_endpoints();

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

fn display_available_endpoints() {
    info!("=== Available Endpoints ===");
    for endpoint in ApiInfo::current().endpoints {
        info!(
            "  {:<6} {:<18} {}",
            endpoint.method, endpoint.path, endpoint.description
        );
    }
}
