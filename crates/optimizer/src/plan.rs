//! Result of ordering one hypergraph.
use crate::partition_tree::PartitionNode;
use crate::total_order::{Coverage, TotalOrder};
use catalog::Attribute;
use common::fingerprint;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// A relation's attributes in total-order position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RelationOrder {
    pub label: String,
    pub attributes: Vec<Attribute>,
}

impl fmt::Display for RelationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.label, self.attributes.iter().join(", "))
    }
}

/// Everything a downstream emitter needs: the total order and every
/// relation re-expressed in it.
#[derive(Debug, Clone, Serialize)]
pub struct VariableOrderPlan {
    total_order: TotalOrder,
    relation_orders: Vec<RelationOrder>,
    coverage: Coverage,
    #[serde(skip)]
    tree: PartitionNode,
}

impl VariableOrderPlan {
    pub(crate) fn new(
        tree: PartitionNode,
        total_order: TotalOrder,
        relation_orders: Vec<RelationOrder>,
        coverage: Coverage,
    ) -> Self {
        Self {
            total_order,
            relation_orders,
            coverage,
            tree,
        }
    }

    pub fn total_order(&self) -> &TotalOrder {
        &self.total_order
    }

    /// Per-relation attribute sequences, in relation-list order.
    pub fn relation_orders(&self) -> &[RelationOrder] {
        &self.relation_orders
    }

    pub fn relation_order(&self, label: &str) -> Option<&RelationOrder> {
        self.relation_orders.iter().find(|r| r.label == label)
    }

    pub fn coverage(&self) -> &Coverage {
        &self.coverage
    }

    /// Partition tree the order was flattened from.
    pub fn tree(&self) -> &PartitionNode {
        &self.tree
    }

    /// Hash of the order and the relation orders.
    pub fn fingerprint(&self) -> u64 {
        fingerprint((self.total_order.as_slice(), &self.relation_orders))
    }
}

impl fmt::Display for VariableOrderPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "order: {}", self.total_order)?;
        for relation in &self.relation_orders {
            writeln!(f, "  {}", relation)?;
        }
        if !self.coverage.missing.is_empty() {
            writeln!(
                f,
                "  missing: [{}]",
                self.coverage.missing.iter().join(", ")
            )?;
        }
        Ok(())
    }
}
