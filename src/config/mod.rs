// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-only configuration; no config files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, ServerConfig};
