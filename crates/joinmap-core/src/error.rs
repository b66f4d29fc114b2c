use thiserror::Error;

/// Core error type shared across joinmap crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The referenced table or view exists in no known schema.
    #[error("no table or view named '{0}' exists in the schema")]
    NoSuchRelation(String),
    /// Caller supplied explicit column lists of unequal length for the two sides.
    #[error("origin and destination column lists must have the same length (got {origin} and {destination})")]
    MismatchedColumnCount { origin: usize, destination: usize },
    /// Several declared foreign keys satisfy the same filter.
    #[error(
        "ambiguous foreign key from '{origin}' to '{destination}': more than one declared \
         foreign key matches; supply an explicit column mapping with both sides specified"
    )]
    AmbiguousForeignKey { origin: String, destination: String },
    /// No declared foreign key, no usable primary-key fallback, and the hints
    /// given are insufficient to compose a mapping.
    #[error(
        "cannot infer a foreign key from '{origin}' to '{destination}': no declared foreign \
         key matches and no primary-key fallback applies; supply an explicit column mapping \
         with both sides specified"
    )]
    UninferableForeignKey { origin: String, destination: String },
    /// Database error or adapter failure.
    #[error("database error: {0}")]
    Db(String),
}

impl Error {
    /// Returns true for errors that indicate a structurally unresolvable
    /// relationship declaration rather than correctable input.
    ///
    /// A schema-validation pass run at startup can collect these across all
    /// declared relationships instead of aborting on the first one.
    pub fn is_configuration_defect(&self) -> bool {
        matches!(
            self,
            Error::AmbiguousForeignKey { .. } | Error::UninferableForeignKey { .. }
        )
    }
}

/// Convenience alias for results returned by joinmap crates.
pub type Result<T> = std::result::Result<T, Error>;
