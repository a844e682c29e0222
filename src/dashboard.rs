// ABOUTME: Server-rendered HTML dashboard showing one day's fitness metrics
// ABOUTME: Classifies each metric into good/medium/poor tiers and renders a date selector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! "Your Score Today" dashboard
//!
//! A single self-contained page: four metric cards for the selected day and
//! a drop-down to switch days. Unknown or malformed dates fall back to the
//! first day in the dataset so the page always renders something.

use crate::errors::{AppError, AppResult};
use crate::metrics::MetricsDataset;
use crate::utils::html::{escape_html_attribute, escape_html_text};
use chrono::NaiveDate;
use recovery_core::constants::dates::DISPLAY_DATE_FORMAT;
use recovery_core::constants::tiers;
use recovery_core::models::FitnessMetrics;
use std::fmt::Write;

/// Quality tier of a metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Healthy value
    Good,
    /// Borderline value
    Medium,
    /// Value that needs attention
    Poor,
}

impl Tier {
    /// CSS modifier class
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Medium => "medium",
            Self::Poor => "poor",
        }
    }
}

/// Tier and description for a recovery score
#[must_use]
pub fn recovery_tier(score: f64) -> (Tier, &'static str) {
    if score > tiers::RECOVERY_GOOD {
        (Tier::Good, "Excellent recovery")
    } else if score > tiers::RECOVERY_MEDIUM {
        (Tier::Medium, "Average recovery")
    } else {
        (Tier::Poor, "Poor recovery")
    }
}

/// Tier and description for a body battery level
#[must_use]
pub fn body_battery_tier(level: f64) -> (Tier, &'static str) {
    if level > tiers::BODY_BATTERY_GOOD {
        (Tier::Good, "High energy levels")
    } else if level > tiers::BODY_BATTERY_MEDIUM {
        (Tier::Medium, "Moderate energy")
    } else {
        (Tier::Poor, "Low energy levels")
    }
}

/// Tier and description for hours slept
#[must_use]
pub fn sleep_tier(hours: f64) -> (Tier, &'static str) {
    if hours > tiers::SLEEP_GOOD {
        (Tier::Good, "Well rested")
    } else if hours > tiers::SLEEP_MEDIUM {
        (Tier::Medium, "Adequate sleep")
    } else {
        (Tier::Poor, "Sleep deficit")
    }
}

/// Tier and description for a stress level; lower is better
#[must_use]
pub fn stress_tier(level: u8) -> (Tier, &'static str) {
    if level < tiers::STRESS_GOOD {
        (Tier::Good, "Low stress")
    } else if level < tiers::STRESS_MEDIUM {
        (Tier::Medium, "Moderate stress")
    } else {
        (Tier::Poor, "High stress")
    }
}

struct MetricCard {
    title: &'static str,
    kind: &'static str,
    value: String,
    tier: Tier,
    description: &'static str,
}

fn cards(metrics: &FitnessMetrics) -> [MetricCard; 4] {
    let card = |title, kind, value, (tier, description): (Tier, &'static str)| MetricCard {
        title,
        kind,
        value,
        tier,
        description,
    };

    [
        card(
            "Recovery Score",
            "recovery",
            metrics.recovery_score.to_string(),
            recovery_tier(metrics.recovery_score),
        ),
        card(
            "Body Battery",
            "battery",
            metrics.body_battery.to_string(),
            body_battery_tier(metrics.body_battery),
        ),
        card(
            "Sleep Hours",
            "sleep",
            metrics.sleep_hours.to_string(),
            sleep_tier(metrics.sleep_hours),
        ),
        card(
            "Stress Level",
            "stress",
            metrics.stress_level.to_string(),
            stress_tier(metrics.stress_level),
        ),
    ]
}

/// Format a date the way the dashboard displays it ("January 01, 2023")
#[must_use]
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Render the dashboard page for `requested`, or the first day if it is absent
///
/// # Errors
///
/// Returns a not-found error when the dataset holds no days
pub fn render_dashboard(dataset: &MetricsDataset, requested: Option<&str>) -> AppResult<String> {
    let (selected, metrics) = requested
        .and_then(|date| dataset.get_str(date))
        .or_else(|| {
            let first = dataset.first_date()?;
            dataset.get(first).map(|metrics| (first, metrics))
        })
        .ok_or_else(|| AppError::not_found("No metrics data available"))?;

    let mut html = String::with_capacity(8 * 1024);
    html.push_str(PAGE_HEAD);

    write!(
        html,
        "<body>\n<div class=\"container\">\n<h1>Your Score Today</h1>\n<div class=\"subtitle\">{}</div>\n",
        escape_html_text(&display_date(selected))
    )
    .ok();

    html.push_str("<div class=\"date-selector\">\n<select id=\"date-select\" onchange=\"window.location.href='/dashboard?date=' + this.value\">\n");
    for date in dataset.dates() {
        let key = date.to_string();
        writeln!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            escape_html_attribute(&key),
            if date == selected { " selected" } else { "" },
            escape_html_text(&display_date(date))
        )
        .ok();
    }
    html.push_str("</select>\n</div>\n<div class=\"metrics\">\n");

    for card in cards(metrics) {
        write!(
            html,
            "<div class=\"metric-card\">\n<div class=\"metric-title\">{}</div>\n<div class=\"metric-value {} {}\">{}</div>\n<div class=\"metric-desc\">{}</div>\n</div>\n",
            card.title,
            card.kind,
            card.tier.css_class(),
            escape_html_text(&card.value),
            card.description
        )
        .ok();
    }

    html.push_str("</div>\n</div>\n</body>\n</html>\n");
    Ok(html)
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Your Score Today</title>
<style>
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; padding: 0; background-color: #f7f9fc; color: #333; }
.container { max-width: 800px; margin: 40px auto; padding: 20px; background-color: white; border-radius: 10px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1); }
h1 { text-align: center; color: #2c3e50; margin-bottom: 5px; }
.subtitle { text-align: center; color: #7f8c8d; margin-bottom: 30px; font-size: 1.1em; }
.date-selector { margin: 20px 0; text-align: center; }
.metrics { display: grid; grid-template-columns: repeat(2, 1fr); gap: 20px; margin-top: 30px; }
.metric-card { background-color: #f8fafc; border-radius: 10px; padding: 20px; text-align: center; box-shadow: 0 2px 5px rgba(0, 0, 0, 0.05); }
.metric-title { font-size: 1.1em; color: #7f8c8d; margin-bottom: 10px; font-weight: 500; }
.metric-value { font-size: 2.5em; font-weight: 700; margin: 10px 0; }
.metric-desc { font-size: 0.9em; color: #7f8c8d; }
.metric-value.poor { color: #e74c3c; }
.metric-value.medium { color: #f39c12; }
.metric-value.good { color: #27ae60; }
select { padding: 10px; border-radius: 5px; border: 1px solid #ddd; font-size: 1em; background-color: white; cursor: pointer; min-width: 200px; }
</style>
</head>
"#;
