//! Core contracts and resolution logic for joinmap.
//!
//! This crate defines the schema metadata types, the `SchemaInspector`
//! boundary, and the join-mapping resolver shared across adapters and the
//! query-construction layers that consume resolved mappings.

pub mod check;
pub mod error;
pub mod inspector;
pub mod mapping;
pub mod relation;
pub mod resolve;

pub use check::{check_relationships, CheckIssue, CheckReport, RelationshipSpec};
pub use error::{Error, Result};
pub use inspector::SchemaInspector;
pub use mapping::{ColumnPair, ForeignKeyMapping, JoinColumn, JoinMapping};
pub use relation::{DeclaredForeignKey, RelationKind};
pub use resolve::resolve;
