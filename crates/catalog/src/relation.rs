//! Relations: named hyperedges of the join hypergraph.

use crate::Attribute;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A hyperedge of the query hypergraph: a label and the attributes it binds.
///
/// Attributes are kept in a `BTreeSet`, so duplicates collapse and iteration
/// is ascending regardless of the order they were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    label: String,
    attributes: BTreeSet<Attribute>,
}

impl Relation {
    /// Create a new relation.
    #[must_use]
    pub fn new<A>(label: impl Into<String>, attributes: impl IntoIterator<Item = A>) -> Self
    where
        A: Into<Attribute>,
    {
        Self {
            label: label.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    /// Relation label.
    #[must_use]
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Attribute set, ascending.
    #[must_use]
    #[inline]
    pub fn attributes(&self) -> &BTreeSet<Attribute> {
        &self.attributes
    }

    /// Number of distinct attributes.
    #[must_use]
    #[inline]
    pub fn arity(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    #[inline]
    pub fn contains(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }

    /// True if the relation binds at least one attribute of `set`.
    #[must_use]
    pub fn intersects(&self, set: &BTreeSet<Attribute>) -> bool {
        !self.attributes.is_disjoint(set)
    }

    /// True if every attribute of `set` is bound by this relation.
    #[must_use]
    pub fn covers(&self, set: &BTreeSet<Attribute>) -> bool {
        set.is_subset(&self.attributes)
    }
}

impl fmt::Display for Relation {
    /// Formats as `label(a, b, c)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.label, self.attributes.iter().join(", "))
    }
}
