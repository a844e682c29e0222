// ABOUTME: Integration tests for the server-rendered metrics dashboard
// ABOUTME: Checks date selection, first-day fallback, tier classes, and escaping of query input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use chrono::NaiveDate;
use helpers::axum_test::AxumTestRequest;
use helpers::{app_with_dataset, sample_app};
use recovery_core::models::FitnessMetrics;
use recovery_score_api::metrics::MetricsDataset;
use serde_json::Value;

async fn dashboard(uri: &str) -> String {
    AxumTestRequest::get(uri)
        .send(sample_app())
        .await
        .assert_status(StatusCode::OK)
        .text()
}

#[tokio::test]
async fn test_dashboard_shows_requested_date() {
    let html = dashboard("/dashboard?date=2023-01-03").await;

    assert!(html.contains("Your Score Today"));
    assert!(html.contains("January 03, 2023"));
    assert!(html.contains("<option value=\"2023-01-03\" selected>"));
    assert!(html.contains("metric-value recovery good\">56.9<"));
    assert!(html.contains("metric-value battery poor\">2.2<"));
    assert!(html.contains("metric-value sleep good\">7.6<"));
    assert!(html.contains("metric-value stress medium\">31<"));
}

#[tokio::test]
async fn test_dashboard_defaults_to_first_date() {
    let html = dashboard("/dashboard").await;

    assert!(html.contains("January 01, 2023"));
    assert!(html.contains("<option value=\"2023-01-01\" selected>"));
}

#[tokio::test]
async fn test_unknown_date_falls_back_to_first_date() {
    let html = dashboard("/dashboard?date=1999-12-31").await;

    assert!(html.contains("<option value=\"2023-01-01\" selected>"));
    assert!(!html.contains("1999"));
}

#[tokio::test]
async fn test_non_canonical_date_falls_back_to_first_date() {
    let html = dashboard("/dashboard?date=2023-1-3").await;

    assert!(html.contains("<option value=\"2023-01-01\" selected>"));
    assert!(!html.contains("<option value=\"2023-01-03\" selected>"));
}

#[tokio::test]
async fn test_values_match_their_tier() {
    let mut dataset = MetricsDataset::new();
    dataset.insert(
        NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        FitnessMetrics::new(20.05, 50.04, 7.04, 10),
    );

    let html = AxumTestRequest::get("/dashboard")
        .send(app_with_dataset(dataset))
        .await
        .assert_status(StatusCode::OK)
        .text();

    assert!(html.contains("metric-value recovery poor\">20.05<"));
    assert!(html.contains("metric-value battery good\">50.04<"));
    assert!(html.contains("metric-value sleep good\">7.04<"));
}

#[tokio::test]
async fn test_markup_in_query_is_not_reflected() {
    let html = dashboard("/dashboard?date=%3Cscript%3Ealert(1)%3C%2Fscript%3E").await;

    assert!(!html.contains("<script>"));
}

#[tokio::test]
async fn test_dashboard_lists_every_date() {
    let html = dashboard("/dashboard").await;

    assert_eq!(html.matches("<option value=").count(), 7);
}

#[tokio::test]
async fn test_empty_dataset_is_not_found() {
    let body: Value = AxumTestRequest::get("/dashboard")
        .send(app_with_dataset(MetricsDataset::new()))
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();

    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}
