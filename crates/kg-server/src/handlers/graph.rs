//! Full graph handler.

use axum::extract::State;
use axum::Json;
use kg_storage::GraphStore;

use crate::error::ApiError;
use crate::schema::graph::GraphResponse;
use crate::state::AppState;

/// Returns all nodes and all relationships. Fails as a whole if either read
/// fails.
///
/// `GET /api/graph`
pub async fn get_graph(State(state): State<AppState>) -> Result<Json<GraphResponse>, ApiError> {
    let store = state.store.lock().await;
    let graph = store.load_graph()?;
    Ok(Json(graph))
}
