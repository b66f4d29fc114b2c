use joinmap_core::{ColumnPair, DeclaredForeignKey, RelationKind};

use super::queries::RawForeignKey;

/// Map a `pg_class.relkind` code onto a relation kind.
///
/// Partitioned tables behave like tables and materialized views like views
/// for join resolution; anything else is filtered out at the query level.
pub fn relkind_to_relation_kind(relkind: &str) -> Option<RelationKind> {
    match relkind {
        "r" | "p" => Some(RelationKind::Table),
        "v" | "m" => Some(RelationKind::View),
        _ => None,
    }
}

pub fn map_foreign_keys(raw: Vec<RawForeignKey>) -> Vec<DeclaredForeignKey> {
    raw.into_iter()
        .map(|fk| DeclaredForeignKey {
            name: Some(fk.name),
            destination: fk.referenced_table,
            pairs: fk
                .columns
                .into_iter()
                .zip(fk.referenced_columns)
                .map(|(origin, destination)| ColumnPair::new(origin, destination))
                .collect(),
        })
        .collect()
}
