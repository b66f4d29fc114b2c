use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::inspector::SchemaInspector;
use crate::mapping::ForeignKeyMapping;
use crate::relation::{DeclaredForeignKey, RelationKind};

/// Resolve how `origin` joins to `destination`.
///
/// Sources of truth are consulted in strict precedence order: fully explicit
/// caller hints, foreign keys declared on the origin table, then a positional
/// fallback against the destination's primary key. Name matching is
/// case-insensitive throughout, but the returned mapping always preserves the
/// casing and order of its authoritative source.
///
/// `origin_hint` and `destination_hint` are each either absent or a complete
/// ordered column list; there are no partial per-column hints.
pub async fn resolve(
    inspector: &dyn SchemaInspector,
    origin: &str,
    destination: &str,
    origin_hint: Option<&[String]>,
    destination_hint: Option<&[String]>,
) -> Result<ForeignKeyMapping> {
    // Fully explicit hints are authoritative and bypass the schema entirely.
    if let (Some(origin_columns), Some(destination_columns)) = (origin_hint, destination_hint) {
        if origin_columns.len() != destination_columns.len() {
            return Err(Error::MismatchedColumnCount {
                origin: origin_columns.len(),
                destination: destination_columns.len(),
            });
        }
        // A mapping is a non-empty pairing; empty lists give nothing to join on.
        if origin_columns.is_empty() {
            return Err(uninferable(origin, destination));
        }
        return Ok(ForeignKeyMapping::zip(origin_columns, destination_columns));
    }

    let origin_kind = inspector
        .relation_kind(origin)
        .await?
        .ok_or_else(|| Error::NoSuchRelation(origin.to_string()))?;

    match origin_kind {
        RelationKind::Table => {
            let declared = inspector.foreign_keys(origin).await?;
            let mut candidates: Vec<DeclaredForeignKey> = declared
                .into_iter()
                .filter(|fk| candidate_matches(fk, destination, origin_hint, destination_hint))
                .collect();
            debug!(
                event = "fk_candidates_filtered",
                origin,
                destination,
                count = candidates.len()
            );

            if candidates.len() > 1 {
                return Err(Error::AmbiguousForeignKey {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                });
            }
            if let Some(fk) = candidates.pop() {
                // Declared order and catalog casing win over hint casing.
                return Ok(ForeignKeyMapping::from_pairs(fk.pairs));
            }
        }
        RelationKind::View => {
            // Views declare no foreign keys; without an origin hint nothing
            // identifies which of their columns should participate.
            if origin_hint.is_none() {
                return Err(uninferable(origin, destination));
            }
        }
    }

    // Primary-key fallback. Only an origin hint can drive it.
    let Some(origin_columns) = origin_hint else {
        return Err(uninferable(origin, destination));
    };

    let destination_kind = inspector
        .relation_kind(destination)
        .await?
        .ok_or_else(|| Error::NoSuchRelation(destination.to_string()))?;
    if destination_kind != RelationKind::Table {
        // A view has no primary key to fall back on.
        return Err(uninferable(origin, destination));
    }

    let primary_key = inspector.primary_key(destination).await?;
    if !primary_key.is_empty() && origin_columns.len() == primary_key.len() {
        debug!(
            event = "primary_key_fallback",
            origin,
            destination,
            columns = primary_key.len()
        );
        return Ok(ForeignKeyMapping::zip(origin_columns, &primary_key));
    }

    Err(uninferable(origin, destination))
}

fn uninferable(origin: &str, destination: &str) -> Error {
    Error::UninferableForeignKey {
        origin: origin.to_string(),
        destination: destination.to_string(),
    }
}

/// A declared foreign key is a candidate when its destination matches and
/// every supplied hint agrees with its column set, ignoring case and order.
fn candidate_matches(
    fk: &DeclaredForeignKey,
    destination: &str,
    origin_hint: Option<&[String]>,
    destination_hint: Option<&[String]>,
) -> bool {
    if fk.destination.to_lowercase() != destination.to_lowercase() {
        return false;
    }
    if let Some(hint) = origin_hint {
        if folded_set(hint.iter().map(String::as_str)) != folded_set(fk.origin_columns()) {
            return false;
        }
    }
    if let Some(hint) = destination_hint {
        if folded_set(hint.iter().map(String::as_str)) != folded_set(fk.destination_columns()) {
            return false;
        }
    }
    true
}

fn folded_set<'a>(names: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    names.map(str::to_lowercase).collect()
}
