//! Validation functionality
//!
//! Structural checks for parsed rule definitions. All violations for one
//! definition are collected in a single pass so a user fixing a malformed
//! file sees every problem at once.

pub mod schema;

pub use schema::{validate_definition, SchemaViolation};
