//! Route table for the knowledge graph API.
//!
//! All routes live under `/api`: two reads (`fetch_nodes`, `graph`) and two
//! inserts (`nodes`, `relationships`).

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Maps the four graph endpoints onto their handlers over a shared store.
///
/// Browsers on any origin may call these routes. Each request gets a
/// tracing span.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/fetch_nodes", get(handlers::nodes::fetch_nodes))
        .route("/api/nodes", post(handlers::nodes::create_node))
        .route(
            "/api/relationships",
            post(handlers::relationships::create_relationship),
        )
        .route("/api/graph", get(handlers::graph::get_graph))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
