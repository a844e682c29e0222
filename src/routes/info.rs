// ABOUTME: Root route describing the API, its version, and how to call each endpoint
// ABOUTME: Static content, useful as a landing page when exploring the service in a browser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{routing::get, Json, Router};
use recovery_core::constants::server::API_TITLE;
use serde::Serialize;

/// One endpoint entry in the API description
#[derive(Debug, Clone, Serialize)]
pub struct EndpointInfo {
    /// Route path
    pub path: &'static str,
    /// HTTP method
    pub method: &'static str,
    /// What the endpoint does
    pub description: &'static str,
}

/// Body of `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct ApiInfo {
    /// API title
    pub api: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Available endpoints
    pub endpoints: Vec<EndpointInfo>,
    /// Short usage hint
    pub usage: &'static str,
}

impl ApiInfo {
    /// Description of this server
    #[must_use]
    pub fn current() -> Self {
        let endpoint = |path, method, description| EndpointInfo {
            path,
            method,
            description,
        };

        Self {
            api: API_TITLE,
            version: env!("CARGO_PKG_VERSION"),
            endpoints: vec![
                endpoint("/", "GET", "This information page"),
                endpoint(
                    "/training-status",
                    "POST",
                    "Get training status based on recovery score (POST)",
                ),
                endpoint(
                    "/training-status",
                    "GET",
                    "Get training status based on recovery score (GET)",
                ),
                endpoint("/api/dates", "GET", "List dates with fitness data"),
                endpoint("/api/data/:date", "GET", "Fitness metrics for one date"),
                endpoint("/dashboard", "GET", "HTML dashboard for one date (?date=YYYY-MM-DD)"),
                endpoint("/health", "GET", "Liveness probe"),
                endpoint("/ready", "GET", "Readiness probe"),
            ],
            usage: "Send a POST request to /training-status with a JSON body containing 'recovery_score' or a GET request to /training-status?recovery_score=value",
        }
    }
}

/// API description routes
pub struct InfoRoutes;

impl InfoRoutes {
    /// Create the `/` route
    pub fn routes() -> Router {
        Router::new().route("/", get(|| async { Json(ApiInfo::current()) }))
    }
}
