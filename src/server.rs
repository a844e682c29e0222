// ABOUTME: HTTP server assembly: router composition, middleware stack, binding, and shutdown
// ABOUTME: Falls back to a secondary port once when the configured port is already taken
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::middleware::{request_id_of, setup_cors, MakeRequestUuidV4};
use crate::resources::ServerResources;
use crate::routes::{
    DashboardRoutes, HealthRoutes, InfoRoutes, MetricsRoutes, TrainingStatusRoutes,
};
use axum::{body::Body, Router};
use http::Request;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, warn};

/// Build the complete application router with its middleware stack
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = &resources.config;

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id_of(request),
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(setup_cors(config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )));

    Router::new()
        .merge(InfoRoutes::routes())
        .merge(TrainingStatusRoutes::routes())
        .merge(MetricsRoutes::routes(Arc::clone(&resources)))
        .merge(DashboardRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .layer(middleware)
}

/// Bind the configured port, retrying once on the fallback port if it is in use
///
/// # Errors
///
/// Returns an internal error if neither port can be bound
pub async fn bind_listener(config: &crate::config::ServerConfig) -> AppResult<TcpListener> {
    let host = config.host.as_str();
    match TcpListener::bind((host, config.http_port)).await {
        Ok(listener) => Ok(listener),
        Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
            let Some(fallback) = config.effective_fallback_port() else {
                return Err(bind_error(host, config.http_port, &e));
            };
            warn!(
                port = config.http_port,
                fallback_port = fallback,
                "Port is in use, trying fallback port"
            );
            TcpListener::bind((host, fallback))
                .await
                .map_err(|e| bind_error(host, fallback, &e))
        }
        Err(e) => Err(bind_error(host, config.http_port, &e)),
    }
}

fn bind_error(host: &str, port: u16, error: &io::Error) -> AppError {
    AppError::internal(format!("Cannot bind {host}:{port}: {error}"))
}

/// Serve the API until Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if binding fails or the server stops unexpectedly
pub async fn run(resources: Arc<ServerResources>) -> AppResult<()> {
    let listener = bind_listener(&resources.config).await?;
    let address = listener.local_addr()?;
    info!(%address, days = resources.dataset.len(), "Recovery Score API listening");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[tokio::test]
    async fn test_bind_falls_back_when_port_taken() {
        let occupied = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let taken_port = occupied.local_addr().unwrap().port();

        let config = ServerConfig {
            host: "127.0.0.1".to_owned(),
            http_port: taken_port,
            fallback_port: Some(0),
            ..ServerConfig::default()
        };
        let listener = bind_listener(&config).await.unwrap();

        assert_ne!(listener.local_addr().unwrap().port(), taken_port);
    }

    #[tokio::test]
    async fn test_bind_without_fallback_reports_error() {
        let occupied = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let taken_port = occupied.local_addr().unwrap().port();

        let config = ServerConfig {
            host: "127.0.0.1".to_owned(),
            http_port: taken_port,
            fallback_port: None,
            ..ServerConfig::default()
        };
        let error = bind_listener(&config).await.unwrap_err();

        assert!(error.message.contains(&taken_port.to_string()));
    }
}
