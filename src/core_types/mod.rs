//! Core types for test-case generation
//!
//! ## Organization
//! - `records` - The normalized test-case record and its artifact fields
//! - `schema` - Schema variants selecting which artifact fields are required

pub mod records;
pub mod schema;

pub use records::{CodeArtifacts, TestCaseRecord, PLACEHOLDER_TYPE};
pub use schema::{ArtifactField, SchemaVariant};
