//! Route modules for the expected-move service
//!
//! This module contains endpoint group-specific routers:
//! - form: The interactive calculator page
//! - expected_move: The JSON calculation endpoint
//! - health: Health check and monitoring endpoints

pub mod expected_move;
pub mod form;
pub mod health;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use adapter_market::MarketDataProvider;

use crate::config::ServiceConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<ServiceConfig>,
    /// Market data provider the calculation endpoint fetches through
    pub provider: Arc<dyn MarketDataProvider>,
    /// Service start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServiceConfig>, provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            config,
            provider,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServiceConfig>, provider: Arc<dyn MarketDataProvider>) -> Router {
    let state = AppState::new(config, provider);

    Router::new()
        .merge(form::routes())
        .merge(health::routes())
        .merge(expected_move::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter_market::FixedSnapshotProvider;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_router() -> Router {
        build_router(
            Arc::new(ServiceConfig::default()),
            Arc::new(FixedSnapshotProvider::earnings_fixture()),
        )
    }

    #[tokio::test]
    async fn test_build_router_creates_valid_router() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_router_merges_all_route_groups() {
        let router = test_router();

        // Form page
        let response = router
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Probes
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Calculation endpoint rejects GET
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/expected-move")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/unknown/path")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
