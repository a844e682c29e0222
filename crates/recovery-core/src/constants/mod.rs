// ABOUTME: Application constants for training decisions, metric ranges, and dashboard tiers
// ABOUTME: Central place for thresholds shared by the evaluator, generator, and renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Thresholds are grouped by the component that reads them. The recovery
//! decision uses an hours scale (0-72) while the dashboard tiers use the
//! display scale of the daily fixtures; the two are intentionally kept apart.

/// Recovery decision thresholds (hours-equivalent scale)
pub mod recovery {
    /// Lowest accepted recovery score
    pub const MIN_RECOVERY_HOURS: f64 = 0.0;

    /// Highest accepted recovery score
    pub const MAX_RECOVERY_HOURS: f64 = 72.0;

    /// Scores strictly above this cancel tomorrow's training
    pub const CANCEL_TRAINING_ABOVE_HOURS: f64 = 20.0;

    /// Advisory returned when training is cancelled
    pub const CANCELLED_MESSAGE: &str = "No training tomorrow, all training will be cancelled.";

    /// Advisory returned when training continues
    pub const CONTINUE_MESSAGE: &str = "Training will continue as scheduled.";

    /// Message for scores outside the accepted range
    pub const OUT_OF_RANGE_MESSAGE: &str = "Recovery score must be between 0 and 72 hours";
}

/// Synthetic data generation ranges
pub mod generation {
    /// Recovery score range (hours)
    pub const RECOVERY_SCORE_RANGE: (f64, f64) = (0.0, 72.0);

    /// Body battery range
    pub const BODY_BATTERY_RANGE: (f64, f64) = (0.0, 100.0);

    /// Sleep hours range
    pub const SLEEP_HOURS_RANGE: (f64, f64) = (3.0, 9.0);

    /// Stress level range (inclusive)
    pub const STRESS_LEVEL_RANGE: (u8, u8) = (0, 100);

    /// Default first generated day
    pub const DEFAULT_START_DATE: &str = "2023-01-01";

    /// Default last generated day
    pub const DEFAULT_END_DATE: &str = "2023-03-01";
}

/// Dashboard quality tiers
///
/// Values strictly above `GOOD` (or below, for stress) are good, values
/// strictly above `MEDIUM` are medium, everything else is poor.
pub mod tiers {
    /// Recovery score above which recovery is excellent
    pub const RECOVERY_GOOD: f64 = 50.0;
    /// Recovery score above which recovery is average
    pub const RECOVERY_MEDIUM: f64 = 25.0;

    /// Body battery above which energy is high
    pub const BODY_BATTERY_GOOD: f64 = 50.0;
    /// Body battery above which energy is moderate
    pub const BODY_BATTERY_MEDIUM: f64 = 25.0;

    /// Sleep hours above which the athlete is well rested
    pub const SLEEP_GOOD: f64 = 7.0;
    /// Sleep hours above which sleep is adequate
    pub const SLEEP_MEDIUM: f64 = 5.0;

    /// Stress below which stress is low
    pub const STRESS_GOOD: u8 = 30;
    /// Stress below which stress is moderate
    pub const STRESS_MEDIUM: u8 = 60;
}

/// Date formats
pub mod dates {
    /// Wire format for date keys
    pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

    /// Human-readable format used by the dashboard
    pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";
}

/// Server defaults, overridable through the environment
pub mod server {
    /// Service name used in logs and the API description
    pub const SERVICE_NAME: &str = "recovery-score-api";

    /// Human-readable API title
    pub const API_TITLE: &str = "Recovery Score API";

    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";

    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;

    /// Port tried once when the default port is already in use
    pub const DEFAULT_FALLBACK_PORT: u16 = 8001;

    /// Default per-request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
}
