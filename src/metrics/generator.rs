// ABOUTME: Synthetic daily fitness metric generator for demos and local testing
// ABOUTME: Produces one uniformly random record per day, reproducible when seeded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::MetricsDataset;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use recovery_core::constants::generation::{
    BODY_BATTERY_RANGE, RECOVERY_SCORE_RANGE, SLEEP_HOURS_RANGE, STRESS_LEVEL_RANGE,
};
use recovery_core::models::FitnessMetrics;
use tracing::debug;

/// Generates synthetic daily metrics
pub struct MetricsGenerator {
    rng: StdRng,
}

impl MetricsGenerator {
    /// Create a generator, seeded for reproducible output when `seed` is set
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self { rng }
    }

    /// Generate one record per day from `start` to `end`, both inclusive
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if `start` is after `end`
    pub fn generate(&mut self, start: NaiveDate, end: NaiveDate) -> AppResult<MetricsDataset> {
        if start > end {
            return Err(AppError::invalid_input(format!(
                "Start date {start} is after end date {end}"
            )));
        }

        let dataset: MetricsDataset = start
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|day| (day, self.next_metrics()))
            .collect();

        debug!(%start, %end, days = dataset.len(), "Generated synthetic metrics");
        Ok(dataset)
    }

    /// Draw a single day's metrics
    pub fn next_metrics(&mut self) -> FitnessMetrics {
        FitnessMetrics {
            recovery_score: self.uniform_tenths(RECOVERY_SCORE_RANGE),
            body_battery: self.uniform_tenths(BODY_BATTERY_RANGE),
            sleep_hours: self.uniform_tenths(SLEEP_HOURS_RANGE),
            stress_level: self
                .rng
                .gen_range(STRESS_LEVEL_RANGE.0..=STRESS_LEVEL_RANGE.1),
        }
    }

    fn uniform_tenths(&mut self, (low, high): (f64, f64)) -> f64 {
        round_tenths(self.rng.gen_range(low..=high))
    }
}

/// Round to one decimal place
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn has_one_decimal(value: f64) -> bool {
        ((value * 10.0).round() - value * 10.0).abs() < 1e-6
    }

    #[test]
    fn test_default_range_covers_every_day_inclusive() {
        let dataset = MetricsGenerator::new(Some(7))
            .generate(ymd(2023, 1, 1), ymd(2023, 3, 1))
            .unwrap();

        // 31 days of January + 28 of February + March 1st
        assert_eq!(dataset.len(), 60);
        assert_eq!(dataset.first_date(), Some(ymd(2023, 1, 1)));
        assert_eq!(dataset.dates().last().copied(), Some(ymd(2023, 3, 1)));
    }

    #[test]
    fn test_values_within_ranges() {
        let dataset = MetricsGenerator::new(Some(42))
            .generate(ymd(2023, 1, 1), ymd(2023, 12, 31))
            .unwrap();

        for (_, metrics) in dataset.iter() {
            assert!((0.0..=72.0).contains(&metrics.recovery_score));
            assert!((0.0..=100.0).contains(&metrics.body_battery));
            assert!((3.0..=9.0).contains(&metrics.sleep_hours));
            assert!(metrics.stress_level <= 100);
            assert!(has_one_decimal(metrics.recovery_score));
            assert!(has_one_decimal(metrics.body_battery));
            assert!(has_one_decimal(metrics.sleep_hours));
        }
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let first = MetricsGenerator::new(Some(2023))
            .generate(ymd(2023, 1, 1), ymd(2023, 1, 31))
            .unwrap();
        let second = MetricsGenerator::new(Some(2023))
            .generate(ymd(2023, 1, 1), ymd(2023, 1, 31))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_day_range() {
        let dataset = MetricsGenerator::new(None)
            .generate(ymd(2023, 5, 5), ymd(2023, 5, 5))
            .unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_reversed_range_rejected() {
        let result = MetricsGenerator::new(None).generate(ymd(2023, 2, 1), ymd(2023, 1, 1));
        assert!(result.is_err());
    }

    #[test]
    fn test_round_tenths() {
        assert_eq!(round_tenths(9.14), 9.1);
        assert_eq!(round_tenths(9.15_f64 + 1e-9), 9.2);
        assert_eq!(round_tenths(0.0), 0.0);
    }
}
