//! Relationship request/response types.

use kg_storage::{NodeId, RelationshipId};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/relationships`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRelationshipRequest {
    pub from_node: Option<NodeId>,
    pub to_node: Option<NodeId>,
    pub relationship: Option<String>,
}

/// Response from creating a relationship.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRelationshipResponse {
    pub id: RelationshipId,
    pub from_node: Option<NodeId>,
    pub to_node: Option<NodeId>,
    pub relationship: Option<String>,
}
