use sqlx::PgPool;

use joinmap_core::{DeclaredForeignKey, RelationKind, Result, SchemaInspector};

mod mapper;
mod queries;

/// Schema inspector for PostgreSQL databases.
///
/// Every lookup is a fresh read against `pg_catalog`; nothing is cached, so
/// callers get point-in-time answers for the duration of one resolution.
#[derive(Debug, Clone)]
pub struct PostgresInspector {
    pool: PgPool,
}

impl PostgresInspector {
    /// Create a new inspector using a pre-configured pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SchemaInspector for PostgresInspector {
    async fn relation_kind(&self, name: &str) -> Result<Option<RelationKind>> {
        let relkind = queries::fetch_relkind(&self.pool, name).await?;
        Ok(relkind
            .as_deref()
            .and_then(mapper::relkind_to_relation_kind))
    }

    async fn foreign_keys(&self, table: &str) -> Result<Vec<DeclaredForeignKey>> {
        let raw = queries::list_foreign_keys(&self.pool, table).await?;
        Ok(mapper::map_foreign_keys(raw))
    }

    async fn primary_key(&self, table: &str) -> Result<Vec<String>> {
        queries::get_primary_key_columns(&self.pool, table).await
    }
}
