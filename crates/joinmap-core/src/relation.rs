use serde::{Deserialize, Serialize};

use crate::mapping::ColumnPair;

/// Kind of relation a name resolves to in the catalog.
///
/// A tagged variant rather than a boolean so that further kinds (materialized
/// views, foreign tables) can be given distinct handling later.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Table,
    View,
}

/// Foreign key metadata as declared by the schema, preserving column order.
///
/// `pairs` keeps the origin and destination columns side by side in the order
/// the constraint declares them, with the catalog's own casing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeclaredForeignKey {
    pub name: Option<String>,
    pub destination: String,
    pub pairs: Vec<ColumnPair>,
}

impl DeclaredForeignKey {
    /// Origin-side column names in declared order.
    pub fn origin_columns(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|pair| pair.origin.as_str())
    }

    /// Destination-side column names in declared order.
    pub fn destination_columns(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|pair| pair.destination.as_str())
    }
}
