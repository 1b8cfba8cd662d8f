//! Validated join hypergraphs.

use crate::error::{CatalogError, Result};
use crate::{Attribute, Relation};
use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use tracing::trace;

/// The ordering input: an attribute universe plus an ordered relation list.
///
/// The relation list order is significant: the partition tree consumes the
/// last relation first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hypergraph {
    universe: BTreeSet<Attribute>,
    relations: Vec<Relation>,
}

impl Hypergraph {
    /// Create a hypergraph, rejecting inputs the ordering cannot handle.
    ///
    /// Fails on an empty relation list, on duplicate relation labels and on
    /// relations that reference attributes missing from `universe`.
    pub fn new<A>(universe: impl IntoIterator<Item = A>, relations: Vec<Relation>) -> Result<Self>
    where
        A: Into<Attribute>,
    {
        let universe: BTreeSet<Attribute> = universe.into_iter().map(Into::into).collect();
        validate(&universe, &relations)?;
        trace!(
            "Hypergraph: {} attributes, {} relations",
            universe.len(),
            relations.len()
        );
        Ok(Self {
            universe,
            relations,
        })
    }

    /// Create a hypergraph whose universe is the union of all relation attributes.
    pub fn from_relations(relations: Vec<Relation>) -> Result<Self> {
        let universe: BTreeSet<Attribute> = relations
            .iter()
            .flat_map(|r| r.attributes().iter().copied())
            .collect();
        Self::new(universe, relations)
    }

    #[must_use]
    pub fn universe(&self) -> &BTreeSet<Attribute> {
        &self.universe
    }

    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Look up a relation by label.
    #[must_use]
    pub fn relation(&self, label: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.label() == label)
    }

    /// Universe attributes that no relation references, ascending.
    #[must_use]
    pub fn unreferenced_attributes(&self) -> Vec<Attribute> {
        self.universe
            .iter()
            .copied()
            .filter(|a| !self.relations.iter().any(|r| r.contains(*a)))
            .collect()
    }
}

/// Check the ordering preconditions on a raw `(universe, relations)` pair.
pub fn validate(universe: &BTreeSet<Attribute>, relations: &[Relation]) -> Result<()> {
    if relations.is_empty() {
        return Err(CatalogError::EmptyRelationList);
    }

    let mut labels: HashSet<&str> = HashSet::with_capacity(relations.len());
    for relation in relations {
        if !labels.insert(relation.label()) {
            return Err(CatalogError::DuplicateRelationLabel(
                relation.label().to_string(),
            ));
        }
        if let Some(&attribute) = relation.attributes().difference(universe).next() {
            return Err(CatalogError::AttributeOutsideUniverse {
                relation: relation.label().to_string(),
                attribute,
            });
        }
    }
    Ok(())
}

impl fmt::Display for Hypergraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "universe: {{{}}}", self.universe.iter().join(", "))?;
        for (idx, relation) in self.relations.iter().enumerate() {
            writeln!(f, "  #{} {}", idx + 1, relation)?;
        }
        Ok(())
    }
}
