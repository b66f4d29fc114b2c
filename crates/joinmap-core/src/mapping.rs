use serde::{Deserialize, Serialize};

/// One matched column pair, origin side first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnPair {
    pub origin: String,
    pub destination: String,
}

impl ColumnPair {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Resolved column correspondence between an origin and a destination relation.
///
/// Pairs keep the order and casing of their authoritative source: the caller's
/// explicit hints, a schema-declared foreign key, or the destination's primary
/// key. The resolver never re-cases or reorders them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForeignKeyMapping {
    pairs: Vec<ColumnPair>,
}

impl ForeignKeyMapping {
    /// Build a mapping from explicit pairs.
    pub fn from_pairs(pairs: Vec<ColumnPair>) -> Self {
        Self { pairs }
    }

    /// Positionally pair an origin column list with a destination column list.
    ///
    /// Callers must have checked that both sides have the same length.
    pub(crate) fn zip(origin: &[String], destination: &[String]) -> Self {
        let pairs = origin
            .iter()
            .zip(destination)
            .map(|(origin, destination)| ColumnPair::new(origin.clone(), destination.clone()))
            .collect();
        Self { pairs }
    }

    pub fn pairs(&self) -> &[ColumnPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Orient the mapping for SQL emission.
    ///
    /// A single foreign-key relationship is queried from either endpoint, so
    /// the physical left/right placement in the emitted JOIN clause depends on
    /// which side initiates the query, not on which side declared the key.
    pub fn orient(&self, origin_is_left: bool) -> JoinMapping {
        let columns = self
            .pairs
            .iter()
            .map(|pair| {
                if origin_is_left {
                    JoinColumn {
                        left: pair.origin.clone(),
                        right: pair.destination.clone(),
                    }
                } else {
                    JoinColumn {
                        left: pair.destination.clone(),
                        right: pair.origin.clone(),
                    }
                }
            })
            .collect();
        JoinMapping { columns }
    }
}

/// One column equality of a JOIN condition, in emission order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinColumn {
    pub left: String,
    pub right: String,
}

/// Oriented view of a [`ForeignKeyMapping`], computed on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinMapping {
    columns: Vec<JoinColumn>,
}

impl JoinMapping {
    pub fn columns(&self) -> &[JoinColumn] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> ForeignKeyMapping {
        ForeignKeyMapping::from_pairs(vec![
            ColumnPair::new("authorID", "id"),
            ColumnPair::new("coAuthorID", "id2"),
        ])
    }

    #[test]
    fn orient_keeps_origin_on_left_when_requested() {
        let joined = mapping().orient(true);
        assert_eq!(joined.columns()[0].left, "authorID");
        assert_eq!(joined.columns()[0].right, "id");
    }

    #[test]
    fn orient_swaps_sides_when_origin_is_right() {
        let joined = mapping().orient(false);
        assert_eq!(joined.columns()[0].left, "id");
        assert_eq!(joined.columns()[0].right, "authorID");
    }

    #[test]
    fn orientations_are_exact_swaps_of_each_other() {
        let mapping = mapping();
        let left = mapping.orient(true);
        let right = mapping.orient(false);
        for (a, b) in left.columns().iter().zip(right.columns()) {
            assert_eq!(a.left, b.right);
            assert_eq!(a.right, b.left);
        }
    }

    #[test]
    fn mapping_round_trips_through_json() {
        let mapping = mapping();
        let json = serde_json::to_string(&mapping).unwrap();
        let back: ForeignKeyMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);
    }
}
