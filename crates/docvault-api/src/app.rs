//! Application builder: wires router, middleware and state into an Axum app.

use axum::Router;
use axum::extract::{MatchedPath, Request};
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    // Spans carry the route template, never the raw URI with its token.
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        let route = request
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str)
            .unwrap_or("<unmatched>");
        tracing::debug_span!("http_request", method = %request.method(), route)
    });

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(cors)
        .layer(trace)
}
