// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-process HTTP request helper and a ready-made router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;

use axum::Router;
use recovery_score_api::{
    config::ServerConfig, metrics::MetricsDataset, resources::ServerResources,
    server::build_router,
};
use std::sync::Arc;

/// Full application router over the built-in sample week
pub fn sample_app() -> Router {
    app_with_dataset(MetricsDataset::sample())
}

/// Full application router over the given dataset
#[allow(dead_code)]
pub fn app_with_dataset(dataset: MetricsDataset) -> Router {
    let resources = ServerResources::new(ServerConfig::default(), dataset);
    build_router(Arc::new(resources))
}
