//! Router configuration for the HTTP server.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! static chart serving, and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new().route("/analyze", post(handlers::analyze));

    let static_files = ServeDir::new(state.charts.dir());
    let body_limit = state.config.server.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/process",
            get(handlers::process_redirect).post(handlers::process_upload),
        )
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .nest_service("/static", static_files)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
