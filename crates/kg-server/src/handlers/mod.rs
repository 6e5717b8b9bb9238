//! HTTP handler modules for the knowledge graph API.
//!
//! Each handler parses the request, acquires the store lock, makes exactly
//! one store call, and returns JSON. Store failures become 500 responses
//! through [`ApiError`](crate::error::ApiError).

pub mod graph;
pub mod nodes;
pub mod relationships;
