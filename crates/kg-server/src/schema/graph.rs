//! Full graph response type.

/// Response of `GET /api/graph`: `{"nodes": [...], "relationships": [...]}`.
pub type GraphResponse = kg_storage::Graph;
