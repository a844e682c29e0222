// ABOUTME: Date-keyed collection of daily fitness metrics with JSON load and save
// ABOUTME: Ships the built-in seven-day sample used when no data file is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily metrics dataset
//!
//! The on-disk form is a JSON object keyed by `YYYY-MM-DD`, which is exactly
//! what `generate-metrics` writes. Dates are kept ordered so listing and the
//! dashboard selector are always chronological.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use recovery_core::constants::dates::DATE_KEY_FORMAT;
use recovery_core::models::FitnessMetrics;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ordered mapping from date to that day's metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsDataset {
    days: BTreeMap<NaiveDate, FitnessMetrics>,
}

impl MetricsDataset {
    /// Create an empty dataset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in seven-day sample (2023-01-01 through 2023-01-07)
    #[must_use]
    pub fn sample() -> Self {
        const SAMPLE: [((i32, u32, u32), FitnessMetrics); 7] = [
            ((2023, 1, 1), FitnessMetrics::new(9.1, 71.8, 8.1, 26)),
            ((2023, 1, 2), FitnessMetrics::new(28.7, 75.4, 7.7, 22)),
            ((2023, 1, 3), FitnessMetrics::new(56.9, 2.2, 7.6, 31)),
            ((2023, 1, 4), FitnessMetrics::new(15.1, 52.4, 3.7, 49)),
            ((2023, 1, 5), FitnessMetrics::new(20.6, 7.1, 4.5, 13)),
            ((2023, 1, 6), FitnessMetrics::new(5.3, 12.2, 5.4, 78)),
            ((2023, 1, 7), FitnessMetrics::new(65.6, 32.5, 5.8, 70)),
        ];

        SAMPLE
            .into_iter()
            .filter_map(|((year, month, day), metrics)| {
                NaiveDate::from_ymd_opt(year, month, day).map(|date| (date, metrics))
            })
            .collect()
    }

    /// Insert or replace the metrics for a date
    pub fn insert(&mut self, date: NaiveDate, metrics: FitnessMetrics) -> Option<FitnessMetrics> {
        self.days.insert(date, metrics)
    }

    /// Metrics for a date, if recorded
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&FitnessMetrics> {
        self.days.get(&date)
    }

    /// Look up a date given as a `YYYY-MM-DD` string
    ///
    /// Unparseable strings are treated like unknown dates.
    #[must_use]
    pub fn get_str(&self, date: &str) -> Option<(NaiveDate, &FitnessMetrics)> {
        let parsed = parse_date_key(date)?;
        self.days.get(&parsed).map(|metrics| (parsed, metrics))
    }

    /// All recorded dates in ascending order
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.keys().copied().collect()
    }

    /// Earliest recorded date
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    /// Number of recorded days
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no day is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate days in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &FitnessMetrics)> {
        self.days.iter().map(|(date, metrics)| (*date, metrics))
    }

    /// Parse a dataset from its JSON form
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON and a configuration
    /// error when the object contains no days.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        if dataset.is_empty() {
            return Err(AppError::config("Metrics dataset contains no days"));
        }
        Ok(dataset)
    }

    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a dataset from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, otherwise the
    /// errors of [`Self::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading metrics dataset");
        let contents = fs::read_to_string(path)
            .map_err(|e| AppError::storage(format!("Cannot read {}: {e}", path.display())))?;
        let dataset = Self::from_json_str(&contents)?;
        info!(path = %path.display(), days = dataset.len(), "Metrics dataset loaded");
        Ok(dataset)
    }

    /// Write the dataset to a JSON file, replacing any existing content
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be written
    pub fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_pretty()?)
            .map_err(|e| AppError::storage(format!("Cannot write {}: {e}", path.display())))?;
        info!(path = %path.display(), days = self.len(), "Metrics dataset written");
        Ok(())
    }
}

impl FromIterator<(NaiveDate, FitnessMetrics)> for MetricsDataset {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, FitnessMetrics)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

/// Parse a date key, accepting only the exact zero-padded `YYYY-MM-DD` form
#[must_use]
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(value, DATE_KEY_FORMAT).ok()?;
    (parsed.format(DATE_KEY_FORMAT).to_string() == value).then_some(parsed)
}
