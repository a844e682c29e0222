// ABOUTME: Shared server resources handed to every route through axum state
// ABOUTME: Holds the loaded configuration and the read-only metrics dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::metrics::MetricsDataset;
use tracing::info;

/// Resources shared by all request handlers
///
/// Built once at startup and never mutated, so handlers share it through an
/// `Arc` without locking.
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Daily metrics served by the data endpoints and the dashboard
    pub dataset: MetricsDataset,
}

impl ServerResources {
    /// Create resources from already-loaded parts
    #[must_use]
    pub fn new(config: ServerConfig, dataset: MetricsDataset) -> Self {
        Self { config, dataset }
    }

    /// Load the dataset named by the configuration, or the built-in sample
    ///
    /// # Errors
    ///
    /// Returns an error if the configured data file cannot be read or parsed
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let dataset = match &config.data_path {
            Some(path) => MetricsDataset::load(path)?,
            None => {
                info!("No METRICS_DATA_PATH configured, serving built-in sample data");
                MetricsDataset::sample()
            }
        };
        Ok(Self::new(config, dataset))
    }
}
