use async_trait::async_trait;

use crate::error::Result;
use crate::relation::{DeclaredForeignKey, RelationKind};

/// Trait implemented by database adapters that expose the schema metadata the
/// resolver needs.
///
/// All methods are read-only lookups against a point-in-time view of the
/// catalog. Implementations match relation names case-insensitively. The
/// resolver may call each method more than once per resolution and performs
/// no caching of its own.
#[async_trait]
pub trait SchemaInspector: Send + Sync {
    /// Resolve a name to a relation kind, or `None` when no table or view
    /// with that name exists in any known schema.
    async fn relation_kind(&self, name: &str) -> Result<Option<RelationKind>>;

    /// All foreign keys declared on a table, in a deterministic order.
    ///
    /// Views carry no declared foreign keys; implementations return an empty
    /// list for them.
    async fn foreign_keys(&self, table: &str) -> Result<Vec<DeclaredForeignKey>>;

    /// Primary key columns of a table in declared order, empty when the table
    /// has no primary key.
    async fn primary_key(&self, table: &str) -> Result<Vec<String>>;
}
