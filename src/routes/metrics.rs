// ABOUTME: Daily metrics route handlers listing available dates and returning one day's data
// ABOUTME: Serves the read-only dataset loaded at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use recovery_core::models::DailyMetricsResponse;
use std::sync::Arc;

/// Daily metrics data routes
pub struct MetricsRoutes;

impl MetricsRoutes {
    /// Create `/api/dates` and `/api/data/:date`
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/dates", get(Self::handle_list_dates))
            .route("/api/data/:date", get(Self::handle_get_day))
            .with_state(resources)
    }

    /// All dates with data, ascending
    async fn handle_list_dates(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<Vec<NaiveDate>> {
        Json(resources.dataset.dates())
    }

    /// Metrics for one date; unknown and malformed dates are both 404
    async fn handle_get_day(
        State(resources): State<Arc<ServerResources>>,
        Path(date): Path<String>,
    ) -> Result<Json<DailyMetricsResponse>, AppError> {
        let (date, metrics) = resources
            .dataset
            .get_str(&date)
            .ok_or_else(|| AppError::not_found(format!("No data found for date {date}")))?;

        Ok(Json(DailyMetricsResponse {
            date,
            data: *metrics,
        }))
    }
}
