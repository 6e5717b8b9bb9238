//! API schema types for request/response definitions.
//!
//! Request fields are all optional: a missing field is passed to the store
//! as NULL and rejected there by the table's `NOT NULL` constraint.

pub mod graph;
pub mod nodes;
pub mod relationships;
