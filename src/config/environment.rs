// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads bind address, ports, data file, CORS, and timeouts from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::errors::{AppError, AppResult};
use recovery_core::constants::server::{
    DEFAULT_FALLBACK_PORT, DEFAULT_HOST, DEFAULT_HTTP_PORT, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Port tried once if `http_port` is already in use
    pub fallback_port: Option<u16>,
    /// JSON metrics dataset; the built-in sample is served when unset
    pub data_path: Option<PathBuf>,
    /// CORS settings
    pub cors: CorsConfig,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            fallback_port: Some(DEFAULT_FALLBACK_PORT),
            data_path: None,
            cors: CorsConfig::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `HOST` | `0.0.0.0` |
    /// | `HTTP_PORT` | `8000` |
    /// | `HTTP_FALLBACK_PORT` | `8001` (empty disables the fallback) |
    /// | `METRICS_DATA_PATH` | unset (built-in sample) |
    /// | `CORS_ALLOWED_ORIGINS` | `*` |
    /// | `REQUEST_TIMEOUT_SECS` | `30` |
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a numeric variable does not parse or
    /// the resulting configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let fallback_port = match env::var("HTTP_FALLBACK_PORT") {
            Ok(value) if value.trim().is_empty() => None,
            Ok(value) => Some(parse_value("HTTP_FALLBACK_PORT", &value)?),
            Err(_) => Some(DEFAULT_FALLBACK_PORT),
        };

        let config = Self {
            host: env_var_or("HOST", DEFAULT_HOST),
            http_port: parse_env("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            fallback_port,
            data_path: env::var("METRICS_DATA_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty host or a zero timeout
    pub fn validate(&self) -> AppResult<()> {
        if self.host.trim().is_empty() {
            return Err(AppError::config("HOST must not be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::config("REQUEST_TIMEOUT_SECS must be greater than 0"));
        }
        Ok(())
    }

    /// Fallback port, unless it is the same as the primary port
    #[must_use]
    pub fn effective_fallback_port(&self) -> Option<u16> {
        self.fallback_port.filter(|port| *port != self.http_port)
    }

    /// One-line human-readable summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recovery Score API Configuration: host={}, http_port={}, fallback_port={}, data={}, cors={}, timeout={}s",
            self.host,
            self.http_port,
            self.effective_fallback_port()
                .map_or_else(|| "disabled".to_owned(), |port| port.to_string()),
            self.data_path
                .as_ref()
                .map_or_else(|| "built-in sample".to_owned(), |path| path.display().to_string()),
            self.cors.allowed_origins,
            self.request_timeout_secs
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    env::var(key).map_or(Ok(default), |value| parse_value(key, &value))
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> AppResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::config(format!("Invalid value for {key}: '{value}'")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_documented_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.http_port, 8000);
        assert_eq!(config.effective_fallback_port(), Some(8001));
        assert!(config.data_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fallback_equal_to_primary_is_ignored() {
        let config = ServerConfig {
            fallback_port: Some(8000),
            ..ServerConfig::default()
        };
        assert_eq!(config.effective_fallback_port(), None);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ServerConfig {
            request_timeout_secs: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_value_reports_key() {
        let error = parse_value::<u16>("HTTP_PORT", "70000").unwrap_err();
        assert!(error.message.contains("HTTP_PORT"));
    }

    #[test]
    fn test_summary_mentions_sample_data() {
        assert!(ServerConfig::default().summary().contains("built-in sample"));
    }
}
