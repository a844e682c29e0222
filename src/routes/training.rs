// ABOUTME: Training status route handlers deciding whether tomorrow's training goes ahead
// ABOUTME: Accepts the recovery score as a JSON body (POST) or a query parameter (GET)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training status routes
//!
//! Both methods share the same evaluator; they only differ in where the
//! recovery score is read from. Extractor rejections are turned into the
//! standard error envelope instead of axum's plain-text bodies.

use crate::errors::AppError;
use crate::intelligence::evaluate;
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query},
    routing::get,
    Json, Router,
};
use recovery_core::models::{RecoveryAssessmentRequest, RecoveryAssessmentResult};

/// Training status routes
pub struct TrainingStatusRoutes;

impl TrainingStatusRoutes {
    /// Create the `/training-status` routes
    pub fn routes() -> Router {
        Router::new().route(
            "/training-status",
            get(Self::handle_get_status).post(Self::handle_post_status),
        )
    }

    /// Handle `POST /training-status` with a JSON body
    async fn handle_post_status(
        payload: Result<Json<RecoveryAssessmentRequest>, JsonRejection>,
    ) -> Result<Json<RecoveryAssessmentResult>, AppError> {
        let Json(request) =
            payload.map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;
        Ok(Json(evaluate(request.recovery_score)?))
    }

    /// Handle `GET /training-status?recovery_score=<float>`
    async fn handle_get_status(
        query: Result<Query<RecoveryAssessmentRequest>, QueryRejection>,
    ) -> Result<Json<RecoveryAssessmentResult>, AppError> {
        let Query(request) =
            query.map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;
        Ok(Json(evaluate(request.recovery_score)?))
    }
}
