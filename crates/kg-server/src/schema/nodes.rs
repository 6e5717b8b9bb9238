//! Node request/response types.

use kg_storage::{Node, NodeId};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/nodes`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNodeRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Response from creating a node: the new id plus the stored fields.
#[derive(Debug, Clone, Serialize)]
pub struct CreateNodeResponse {
    pub id: NodeId,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Response of `GET /api/fetch_nodes`: a bare JSON array of nodes.
pub type NodeListResponse = Vec<Node>;
