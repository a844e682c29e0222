// ABOUTME: Dashboard route serving the server-rendered "Your Score Today" HTML page
// ABOUTME: Accepts an optional ?date= query; unknown dates show the first available day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::dashboard::render_dashboard;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
struct DashboardQuery {
    #[serde(default)]
    date: Option<String>,
}

/// Dashboard routes
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create the `/dashboard` route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/dashboard", get(Self::handle_dashboard))
            .with_state(resources)
    }

    async fn handle_dashboard(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<DashboardQuery>,
    ) -> Result<Html<String>, AppError> {
        render_dashboard(&resources.dataset, query.date.as_deref()).map(Html)
    }
}
