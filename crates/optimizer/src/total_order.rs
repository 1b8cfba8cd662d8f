//! The global attribute order handed to the join engine.
use crate::error::{OptimizerError, Result};
use catalog::{Attribute, Relation};
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Ordered sequence of attributes, with O(1) position lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalOrder {
    order: Vec<Attribute>,
    // first position of each attribute in `order`
    positions: HashMap<Attribute, usize>,
}

impl TotalOrder {
    pub fn new(order: Vec<Attribute>) -> Self {
        let mut positions = HashMap::with_capacity(order.len());
        for (pos, &attribute) in order.iter().enumerate() {
            positions.entry(attribute).or_insert(pos);
        }
        Self { order, positions }
    }

    /// Attributes in order.
    pub fn as_slice(&self) -> &[Attribute] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.positions.contains_key(&attribute)
    }

    /// Zero-based position of `attribute`, if ordered.
    pub fn position(&self, attribute: Attribute) -> Option<usize> {
        self.positions.get(&attribute).copied()
    }

    /// The relation's attributes sorted by their position in this order.
    pub fn reorder(&self, relation: &Relation) -> Result<Vec<Attribute>> {
        let mut keyed = Vec::with_capacity(relation.arity());
        for &attribute in relation.attributes() {
            let pos = self
                .position(attribute)
                .ok_or_else(|| OptimizerError::AttributeNotOrdered {
                    relation: relation.label().to_string(),
                    attribute,
                })?;
            keyed.push((pos, attribute));
        }
        keyed.sort_unstable();
        Ok(keyed.into_iter().map(|(_, attribute)| attribute).collect())
    }

    /// Like [`TotalOrder::reorder`], but attributes missing from the order
    /// are placed after all ordered ones, ascending by id.
    pub fn reorder_lenient(&self, relation: &Relation) -> Vec<Attribute> {
        relation
            .attributes()
            .iter()
            .copied()
            .sorted_by_key(|&a| (self.position(a).unwrap_or(usize::MAX), a))
            .collect()
    }

    /// Compare this order against the universe it was computed for.
    pub fn coverage(&self, universe: &BTreeSet<Attribute>) -> Coverage {
        let missing = universe
            .iter()
            .copied()
            .filter(|a| !self.contains(*a))
            .collect();
        let duplicated = self
            .order
            .iter()
            .copied()
            .duplicates()
            .sorted()
            .collect();
        Coverage {
            missing,
            duplicated,
        }
    }
}

impl Serialize for TotalOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.order)
    }
}

impl fmt::Display for TotalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.order.iter().join(", "))
    }
}

/// How well an order matches its universe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Coverage {
    /// Universe attributes absent from the order, ascending.
    pub missing: Vec<Attribute>,
    /// Attributes emitted more than once, ascending.
    pub duplicated: Vec<Attribute>,
}

impl Coverage {
    /// True if the order is a permutation of the universe.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.duplicated.is_empty()
    }
}
