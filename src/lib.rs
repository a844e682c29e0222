// ABOUTME: Main library entry point for the recovery score API
// ABOUTME: Training status decisions, daily fitness metrics, and the HTTP surface serving both
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recovery Score API
//!
//! Decides whether an athlete should train today from a recovery score
//! (hours of recovery remaining), and serves daily fitness metrics with a
//! small HTML dashboard.
//!
//! ## Decision rule
//!
//! - `0 <= score <= 20`: continue training
//! - `20 < score <= 72`: training cancelled
//! - anything else (including NaN): rejected as out of range
//!
//! ## Architecture
//!
//! - **Intelligence**: the pure recovery evaluator
//! - **Metrics**: daily metrics dataset, random generator, and summary report
//! - **Dashboard**: server-rendered "Your Score Today" page
//! - **Routes**: thin axum handlers per domain
//! - **Server**: router assembly, middleware stack, binding, and shutdown
//!
//! ## Example Usage
//!
//! ```rust
//! use recovery_score_api::intelligence::evaluate;
//! use recovery_core::models::TrainingStatus;
//!
//! let result = evaluate(12.5).expect("12.5 is in range");
//! assert_eq!(result.status, TrainingStatus::Continue);
//! assert!(evaluate(80.0).is_err());
//! ```

/// Environment-based server configuration
pub mod config;

/// HTML dashboard rendering
pub mod dashboard;

/// Unified error handling
pub mod errors;

/// Recovery score evaluation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Daily fitness metrics: dataset, generator, summary
pub mod metrics;

/// HTTP middleware
pub mod middleware;

/// Shared server resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Shared utilities
pub mod utils;
