use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::inspector::SchemaInspector;
use crate::resolve::resolve;

/// One declared relationship to verify against the live schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationshipSpec {
    pub origin: String,
    pub destination: String,
    pub origin_columns: Option<Vec<String>>,
    pub destination_columns: Option<Vec<String>>,
}

impl RelationshipSpec {
    /// A relationship with no column hints on either side.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            origin_columns: None,
            destination_columns: None,
        }
    }
}

/// A relationship declaration the schema cannot satisfy.
#[derive(Debug)]
pub struct CheckIssue {
    pub origin: String,
    pub destination: String,
    pub error: Error,
}

/// Aggregated result of checking a set of relationship declarations.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub issues: Vec<CheckIssue>,
}

impl CheckReport {
    /// Returns true when every declaration resolved.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Resolve every declared relationship, collecting resolution defects instead
/// of stopping at the first one.
///
/// Intended for a validation pass at application startup, so all
/// underspecified or ambiguous declarations are reported in one run. Database
/// failures still abort: they are environmental, not configuration defects.
pub async fn check_relationships(
    inspector: &dyn SchemaInspector,
    specs: &[RelationshipSpec],
) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for spec in specs {
        let outcome = resolve(
            inspector,
            &spec.origin,
            &spec.destination,
            spec.origin_columns.as_deref(),
            spec.destination_columns.as_deref(),
        )
        .await;

        match outcome {
            Ok(_) => {}
            Err(err @ Error::Db(_)) => return Err(err),
            Err(error) => report.issues.push(CheckIssue {
                origin: spec.origin.clone(),
                destination: spec.destination.clone(),
                error,
            }),
        }
    }

    Ok(report)
}
