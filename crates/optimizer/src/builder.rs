//! Recursive construction of the partition tree.
//!
//! Relations are peeled off from the end of the list: the node created with
//! `count` relations in scope splits its universe by `relations[count - 1]`
//! and hands both halves to nodes with `count - 1` relations in scope.
use crate::error::Result;
use crate::partition_tree::PartitionNode;
use catalog::{Attribute, CatalogError, Relation};
use std::collections::BTreeSet;
use tracing::trace;

/// Builds a [`PartitionNode`] tree for a fixed relation list.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'a> {
    relations: &'a [Relation],
}

impl<'a> TreeBuilder<'a> {
    pub fn new(relations: &'a [Relation]) -> Self {
        Self { relations }
    }

    /// Build the tree for `universe` with every relation in scope.
    ///
    /// Returns `None` when no relation intersects `universe` (including an
    /// empty universe or an empty relation list).
    pub fn build_root(&self, universe: &BTreeSet<Attribute>) -> Option<PartitionNode> {
        self.build(universe.clone(), self.relations.len())
    }

    /// Build the subtree for `universe` with `relations[0..count)` in scope.
    pub fn build(&self, universe: BTreeSet<Attribute>, count: usize) -> Option<PartitionNode> {
        let count = count.min(self.relations.len());
        let in_scope = &self.relations[..count];

        // Prune subsets that no relation in scope can tell anything about.
        if !in_scope.iter().any(|r| r.intersects(&universe)) {
            trace!("Pruned {:?} at count {}", universe, count);
            return None;
        }

        // Every relation in scope already binds the whole subset.
        let is_leaf = in_scope.iter().all(|r| r.covers(&universe));
        if count <= 1 || is_leaf {
            trace!("Leaf {:?} at count {}", universe, count);
            return Some(PartitionNode::new(count, universe, None, None));
        }

        let peeled = self.relations[count - 1].attributes();
        let outside: BTreeSet<Attribute> = universe.difference(peeled).copied().collect();
        let inside: BTreeSet<Attribute> = universe.intersection(peeled).copied().collect();
        trace!(
            "Split {:?} at count {} by {}: outside {:?}, inside {:?}",
            universe,
            count,
            self.relations[count - 1].label(),
            outside,
            inside
        );

        let left_child = self.build(outside, count - 1);
        let right_child = self.build(inside, count - 1);
        Some(PartitionNode::new(count, universe, left_child, right_child))
    }
}

/// Build the partition tree for `universe` against the ordered `relations`.
///
/// `Ok(None)` means no relation intersects the universe.
pub fn build_partition_tree(
    universe: &BTreeSet<Attribute>,
    relations: &[Relation],
) -> Result<Option<PartitionNode>> {
    if relations.is_empty() {
        return Err(CatalogError::EmptyRelationList.into());
    }
    Ok(TreeBuilder::new(relations).build_root(universe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptimizerError;

    fn set(ids: &[usize]) -> BTreeSet<Attribute> {
        ids.iter().copied().map(Attribute::new).collect()
    }

    fn triangle() -> Vec<Relation> {
        vec![
            Relation::new("R1", [1usize, 2]),
            Relation::new("R2", [2usize, 3]),
            Relation::new("R3", [1usize, 3]),
        ]
    }

    #[test]
    fn triangle_tree_shape() {
        let root = build_partition_tree(&set(&[1, 2, 3]), &triangle())
            .expect("relations present")
            .expect("universe is relevant");
        assert_eq!(root.label(), 3);
        assert_eq!(root.universe(), &set(&[1, 2, 3]));

        let left = root.left_child().expect("left child");
        assert!(left.is_leaf());
        assert_eq!(left.label(), 2);
        assert_eq!(left.universe(), &set(&[2]));

        let right = root.right_child().expect("right child");
        assert_eq!(right.label(), 2);
        assert_eq!(right.universe(), &set(&[1, 3]));
        let right_left = right.left_child().expect("leaf {1}");
        assert!(right_left.is_leaf());
        assert_eq!(right_left.label(), 1);
        assert_eq!(right_left.universe(), &set(&[1]));
        // {3} is disjoint from R1 and gets pruned.
        assert!(right.right_child().is_none());
    }

    #[test]
    fn single_relation_is_a_leaf() {
        let relations = vec![Relation::new("R1", [1usize, 2])];
        let root = build_partition_tree(&set(&[1, 2]), &relations)
            .expect("relations present")
            .expect("universe is relevant");
        assert!(root.is_leaf());
        assert_eq!(root.label(), 1);
        assert_eq!(root.node_count(), 1);
    }

    #[test]
    fn count_one_stops_even_without_cover() {
        let relations = vec![Relation::new("R1", [1usize])];
        let root = build_partition_tree(&set(&[1, 2]), &relations)
            .expect("relations present")
            .expect("universe is relevant");
        assert!(root.is_leaf());
        assert_eq!(root.universe(), &set(&[1, 2]));
    }

    #[test]
    fn shared_universe_stops_before_count_one() {
        // {1} is bound by every relation, so no split happens at count 3.
        let relations = vec![
            Relation::new("R1", [1usize, 2]),
            Relation::new("R2", [1usize, 3]),
            Relation::new("R3", [1usize, 4]),
        ];
        let root = TreeBuilder::new(&relations)
            .build(set(&[1]), 3)
            .expect("universe is relevant");
        assert!(root.is_leaf());
        assert_eq!(root.label(), 3);
    }

    #[test]
    fn disjoint_relation_prunes_root() {
        let relations = vec![Relation::new("R1", [3usize, 4])];
        let root = build_partition_tree(&set(&[1, 2]), &relations).expect("relations present");
        assert!(root.is_none());
    }

    #[test]
    fn empty_universe_prunes_root() {
        let root = build_partition_tree(&set(&[]), &triangle()).expect("relations present");
        assert!(root.is_none());
    }

    #[test]
    fn empty_relation_list_is_rejected() {
        assert_eq!(
            build_partition_tree(&set(&[1]), &[]),
            Err(OptimizerError::Catalog(CatalogError::EmptyRelationList))
        );
    }

    #[test]
    fn both_children_pruned_leaves_a_leaf() {
        // {2, 3} at count 2: R2 = {2} splits it into {3} and {2},
        // neither of which intersects R1 = {1}.
        let relations = vec![
            Relation::new("R1", [1usize]),
            Relation::new("R2", [2usize]),
            Relation::new("R3", [2usize, 3]),
        ];
        let root = build_partition_tree(&set(&[1, 2, 3]), &relations)
            .expect("relations present")
            .expect("universe is relevant");
        let right = root.right_child().expect("right child");
        assert_eq!(right.universe(), &set(&[2, 3]));
        assert!(right.is_leaf());
    }

    #[test]
    fn children_partition_the_parent_universe() {
        let relations = vec![
            Relation::new("R1", [1usize, 2, 4, 5]),
            Relation::new("R2", [1usize, 3, 4, 6]),
            Relation::new("R3", [1usize, 2, 3]),
            Relation::new("R4", [2usize, 4, 6]),
            Relation::new("R5", [3usize, 5, 6]),
        ];
        let root = build_partition_tree(&set(&[1, 2, 3, 4, 5, 6]), &relations)
            .expect("relations present")
            .expect("universe is relevant");

        fn check(node: &PartitionNode) {
            let mut union = BTreeSet::new();
            for child in [node.left_child(), node.right_child()].into_iter().flatten() {
                assert!(child.universe().is_subset(node.universe()));
                assert!(union.is_disjoint(child.universe()));
                union.extend(child.universe().iter().copied());
                assert_eq!(child.label() + 1, node.label());
                check(child);
            }
        }
        check(&root);
        assert!(root.depth() <= relations.len());
    }
}
