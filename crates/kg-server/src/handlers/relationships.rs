//! Relationship creation handler.

use axum::extract::State;
use axum::Json;
use kg_storage::GraphStore;

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::schema::relationships::{CreateRelationshipRequest, CreateRelationshipResponse};
use crate::state::AppState;

/// Creates a directed, labeled relationship between two node ids.
///
/// The endpoints are not checked against existing nodes.
///
/// `POST /api/relationships`
pub async fn create_relationship(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateRelationshipRequest>,
) -> Result<Json<CreateRelationshipResponse>, ApiError> {
    let mut store = state.store.lock().await;
    let id = store.create_relationship(req.from_node, req.to_node, req.relationship.as_deref())?;
    Ok(Json(CreateRelationshipResponse {
        id,
        from_node: req.from_node,
        to_node: req.to_node,
        relationship: req.relationship,
    }))
}
