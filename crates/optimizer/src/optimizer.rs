//! Variable ordering for join hypergraphs.
use crate::builder::TreeBuilder;
use crate::error::{OptimizerError, Result};
use crate::extractor::extract_total_order;
use crate::plan::{RelationOrder, VariableOrderPlan};
use catalog::Hypergraph;
use common::Config;
use itertools::Itertools;
use tracing::{debug, trace, warn};

#[derive(Debug, Default)]
pub struct Optimizer {
    config: Config,
}

impl Optimizer {
    /// Create an optimizer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compute the total order of `hypergraph` and reorder every relation by it.
    ///
    /// An order that misses universe attributes is logged and reported in the
    /// plan's coverage, or rejected when the coverage policy is `deny`.
    pub fn plan(&self, hypergraph: &Hypergraph) -> Result<VariableOrderPlan> {
        let relations = hypergraph.relations();
        let tree = TreeBuilder::new(relations)
            .build_root(hypergraph.universe())
            .ok_or(OptimizerError::EmptyPartitionTree)?;
        trace!("Partition tree:\n{}", tree);

        let total_order = extract_total_order(Some(&tree))?;
        let coverage = total_order.coverage(hypergraph.universe());
        if !coverage.missing.is_empty() {
            if self.config.denies_uncovered() {
                return Err(OptimizerError::UniverseNotFullyCovered {
                    missing: coverage.missing,
                });
            }
            warn!(
                "Total order {} misses universe attributes [{}]",
                total_order,
                coverage.missing.iter().join(", ")
            );
        }

        let relation_orders = relations
            .iter()
            .map(|r| -> Result<RelationOrder> {
                let attributes = if self.config.denies_uncovered() {
                    total_order.reorder(r)?
                } else {
                    total_order.reorder_lenient(r)
                };
                Ok(RelationOrder {
                    label: r.label().to_string(),
                    attributes,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Ordered {} attributes over {} relations (tree depth {}, {} nodes): {}",
            hypergraph.universe().len(),
            relations.len(),
            tree.depth(),
            tree.node_count(),
            total_order
        );

        Ok(VariableOrderPlan::new(
            tree,
            total_order,
            relation_orders,
            coverage,
        ))
    }

    /// Plan a batch of hypergraphs, stopping at the first failure.
    pub fn plan_all<'a>(
        &self,
        hypergraphs: impl IntoIterator<Item = &'a Hypergraph>,
    ) -> Result<Vec<VariableOrderPlan>> {
        hypergraphs.into_iter().map(|hg| self.plan(hg)).collect()
    }
}
