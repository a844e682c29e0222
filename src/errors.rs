// ABOUTME: Re-exports the shared error types from recovery-core for use inside this crate
// ABOUTME: Keeps `crate::errors::AppError` paths stable for routes and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! All fallible operations return [`AppResult`]. Route handlers return
//! [`AppError`] directly; its `IntoResponse` impl renders the
//! `{"error": {"code", "message"}}` envelope with the matching HTTP status.

pub use recovery_core::errors::*;
