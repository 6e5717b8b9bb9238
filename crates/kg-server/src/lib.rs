//! HTTP/JSON API server for the knowledge graph.
//!
//! Exposes node creation, relationship creation, node listing and a full
//! graph fetch over a single shared SQLite store. This crate contains the
//! configuration, API schema types, error handling, and route definitions.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
