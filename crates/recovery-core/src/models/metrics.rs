// ABOUTME: Daily fitness metric record as produced by the generator and served by the API
// ABOUTME: Holds recovery score, body battery, sleep hours, and stress level for one day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fitness metrics recorded for a single day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessMetrics {
    /// Recovery score
    pub recovery_score: f64,
    /// Body battery level (0-100)
    pub body_battery: f64,
    /// Hours of sleep
    pub sleep_hours: f64,
    /// Stress level (0-100)
    pub stress_level: u8,
}

impl FitnessMetrics {
    /// Create a metrics record
    #[must_use]
    pub const fn new(
        recovery_score: f64,
        body_battery: f64,
        sleep_hours: f64,
        stress_level: u8,
    ) -> Self {
        Self {
            recovery_score,
            body_battery,
            sleep_hours,
            stress_level,
        }
    }
}

/// Metrics for one date, as returned by `GET /api/data/:date`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetricsResponse {
    /// Date in `YYYY-MM-DD` form
    pub date: NaiveDate,
    /// Metrics for that date
    pub data: FitnessMetrics,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_response_serializes_date_key_format() {
        let response = DailyMetricsResponse {
            date: NaiveDate::from_ymd_opt(2023, 1, 4).unwrap(),
            data: FitnessMetrics::new(15.1, 52.4, 3.7, 49),
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["date"], "2023-01-04");
        assert_eq!(json["data"]["stress_level"], 49);
        assert_eq!(json["data"]["sleep_hours"], 3.7);
    }
}
