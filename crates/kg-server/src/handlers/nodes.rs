//! Node handlers (list, create).

use axum::extract::State;
use axum::Json;
use kg_storage::GraphStore;

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::schema::nodes::{CreateNodeRequest, CreateNodeResponse, NodeListResponse};
use crate::state::AppState;

/// Lists every node in storage order.
///
/// `GET /api/fetch_nodes`
pub async fn fetch_nodes(
    State(state): State<AppState>,
) -> Result<Json<NodeListResponse>, ApiError> {
    let store = state.store.lock().await;
    let nodes = store.list_nodes()?;
    Ok(Json(nodes))
}

/// Creates a node.
///
/// `POST /api/nodes`
pub async fn create_node(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateNodeRequest>,
) -> Result<Json<CreateNodeResponse>, ApiError> {
    let mut store = state.store.lock().await;
    let id = store.create_node(req.name.as_deref(), req.kind.as_deref())?;
    Ok(Json(CreateNodeResponse {
        id,
        name: req.name,
        kind: req.kind,
    }))
}
