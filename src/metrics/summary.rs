// ABOUTME: Aggregate statistics and plain-text table rendering for a metrics dataset
// ABOUTME: Computes mean/min/max per metric and formats daily rows as a bordered table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::MetricsDataset;
use serde::Serialize;
use std::fmt::Write;

const COLUMNS: [&str; 5] = [
    "date",
    "recovery_score",
    "body_battery",
    "sleep_hours",
    "stress_level",
];

/// Mean, minimum, and maximum of one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl MetricStats {
    fn from_values(values: impl Iterator<Item = f64>) -> Option<Self> {
        let mut count = 0_usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }
        (count > 0).then(|| Self {
            mean: sum / count as f64,
            min,
            max,
        })
    }
}

/// Per-metric aggregates over a whole dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsSummary {
    /// Number of days aggregated
    pub days: usize,
    /// Recovery score aggregates
    pub recovery_score: MetricStats,
    /// Body battery aggregates
    pub body_battery: MetricStats,
    /// Sleep hours aggregates
    pub sleep_hours: MetricStats,
    /// Stress level aggregates
    pub stress_level: MetricStats,
}

impl MetricsSummary {
    /// Aggregate a dataset; `None` when it has no days
    #[must_use]
    pub fn from_dataset(dataset: &MetricsDataset) -> Option<Self> {
        let stats = |pick: fn(&recovery_core::models::FitnessMetrics) -> f64| {
            MetricStats::from_values(dataset.iter().map(|(_, metrics)| pick(metrics)))
        };

        Some(Self {
            days: dataset.len(),
            recovery_score: stats(|m| m.recovery_score)?,
            body_battery: stats(|m| m.body_battery)?,
            sleep_hours: stats(|m| m.sleep_hours)?,
            stress_level: stats(|m| f64::from(m.stress_level))?,
        })
    }

    fn named(&self) -> [(&'static str, MetricStats); 4] {
        [
            (COLUMNS[1], self.recovery_score),
            (COLUMNS[2], self.body_battery),
            (COLUMNS[3], self.sleep_hours),
            (COLUMNS[4], self.stress_level),
        ]
    }
}

/// Render every day as a bordered, centered text table
#[must_use]
pub fn render_table(dataset: &MetricsDataset) -> String {
    let rows: Vec<[String; 5]> = dataset
        .iter()
        .map(|(date, m)| {
            [
                date.to_string(),
                m.recovery_score.to_string(),
                m.body_battery.to_string(),
                m.sleep_hours.to_string(),
                m.stress_level.to_string(),
            ]
        })
        .collect();

    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .map(|row| row[index].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = widths.iter().fold(String::from("+"), |mut line, width| {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
        line
    });

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    push_row(&mut out, COLUMNS.iter().copied(), &widths);
    out.push_str(&border);
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out.push_str(&border);
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.zip(widths) {
        write!(out, " {cell:^width$} |").ok();
    }
    out.push('\n');
}

/// Render averages followed by min/max lines for each metric
#[must_use]
pub fn render_aggregates(summary: &MetricsSummary) -> String {
    let mut out = format!("== Aggregate Averages for the past {} days ==\n\n", summary.days);
    for (name, stats) in summary.named() {
        writeln!(out, "Average {name}: {:.2}", stats.mean).ok();
    }
    out.push_str("\n(Min / Max values)\n");
    for (name, stats) in summary.named() {
        writeln!(out, "{name}: min={}, max={}", stats.min, stats.max).ok();
    }
    out
}

/// Full report: the daily table under its heading, then the aggregates
#[must_use]
pub fn render_report(dataset: &MetricsDataset) -> String {
    let mut out = String::from("== Individual Daily Stats ==\n\n");
    out.push_str(&render_table(dataset));
    out.push('\n');
    if let Some(summary) = MetricsSummary::from_dataset(dataset) {
        out.push('\n');
        out.push_str(&render_aggregates(&summary));
    }
    out
}
