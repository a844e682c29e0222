// ABOUTME: Core types and constants for the recovery score API
// ABOUTME: Foundation crate with error handling, metric models, and training thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recovery Core
//!
//! Foundation crate providing shared types and constants for the recovery
//! score API. It has no I/O of its own, so both the server and the command
//! line tools can depend on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Training thresholds, metric ranges, and dashboard tiers
//! - **models**: Daily fitness metrics and training assessment types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (daily metrics, training assessments)
pub mod models;
