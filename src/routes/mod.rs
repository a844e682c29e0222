// ABOUTME: Route module organization for the recovery score API HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module exposes a `*Routes` type whose `routes()` returns a
//! ready-to-merge router. Handlers only extract input and delegate.

/// HTML dashboard routes
pub mod dashboard;
/// Health check routes
pub mod health;
/// API description routes
pub mod info;
/// Daily metrics data routes
pub mod metrics;
/// Training status decision routes
pub mod training;

pub use dashboard::DashboardRoutes;
pub use health::HealthRoutes;
pub use info::{ApiInfo, InfoRoutes};
pub use metrics::MetricsRoutes;
pub use training::TrainingStatusRoutes;
