//! Router setup and configuration

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::handlers::{self, AppState};

/// Create the application router.
///
/// Known routes answer other methods with a plain-text 405; unknown paths get
/// a plain-text 404.
pub fn create_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route(
            "/receipts/process",
            post(handlers::process_receipt).fallback(handlers::method_not_allowed),
        )
        .route(
            "/receipts/:id/points",
            get(handlers::get_points).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(config.max_body_bytes)),
        )
}
