// ABOUTME: Daily fitness metrics: dataset storage, synthetic generation, and summaries
// ABOUTME: Backs the metrics API endpoints, the dashboard, and the CLI tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Date-keyed dataset with JSON persistence
pub mod dataset;
/// Synthetic data generator
pub mod generator;
/// Aggregates and text rendering
pub mod summary;

pub use dataset::{parse_date_key, MetricsDataset};
pub use generator::MetricsGenerator;
pub use summary::{render_aggregates, render_report, render_table, MetricStats, MetricsSummary};
