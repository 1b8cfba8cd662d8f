//! Flattening a partition tree into the total order.
use crate::error::{OptimizerError, Result};
use crate::partition_tree::PartitionNode;
use crate::total_order::TotalOrder;
use catalog::Attribute;
use tracing::trace;

/// Depth-first, left-before-right flattening of a [`PartitionNode`] tree.
#[derive(Debug, Default)]
pub struct OrderExtractor {
    out: Vec<Attribute>,
}

impl OrderExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the contribution of the subtree rooted at `node`.
    ///
    /// 1. A leaf contributes its whole universe.
    /// 2. Without a left child only the right subtree contributes.
    /// 3. Without a right child the left subtree contributes, followed by the
    ///    attributes of `node` that the left child does not cover.
    /// 4. Otherwise left then right.
    pub fn extract(&mut self, node: &PartitionNode) {
        match (node.left_child(), node.right_child()) {
            (None, None) => {
                trace!("Emit leaf {:?}", node.universe());
                self.out.extend(node.universe().iter().copied());
            }
            (None, Some(right)) => self.extract(right),
            (Some(left), None) => {
                self.extract(left);
                let rest = node.universe().difference(left.universe()).copied();
                let before = self.out.len();
                self.out.extend(rest);
                trace!(
                    "Recovered {:?} pruned below node {}",
                    &self.out[before..],
                    node.label()
                );
            }
            (Some(left), Some(right)) => {
                self.extract(left);
                self.extract(right);
            }
        }
    }

    /// Attributes appended so far.
    pub fn finish(self) -> TotalOrder {
        TotalOrder::new(self.out)
    }
}

/// Flatten the tree rooted at `root` into a total order.
///
/// An absent root (no relation intersects the universe) is an error rather
/// than an empty order.
pub fn extract_total_order(root: Option<&PartitionNode>) -> Result<TotalOrder> {
    let root = root.ok_or(OptimizerError::EmptyPartitionTree)?;
    let mut extractor = OrderExtractor::new();
    extractor.extract(root);
    Ok(extractor.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_partition_tree;
    use catalog::Relation;
    use std::collections::BTreeSet;

    fn set(ids: &[usize]) -> BTreeSet<Attribute> {
        ids.iter().copied().map(Attribute::new).collect()
    }

    fn attrs(ids: &[usize]) -> Vec<Attribute> {
        ids.iter().copied().map(Attribute::new).collect()
    }

    fn order_of(universe: &[usize], edges: &[&[usize]]) -> Result<TotalOrder> {
        let relations: Vec<Relation> = edges
            .iter()
            .enumerate()
            .map(|(i, e)| Relation::new(format!("R{}", i + 1), e.iter().copied()))
            .collect();
        let root = build_partition_tree(&set(universe), &relations)?;
        extract_total_order(root.as_ref())
    }

    #[test]
    fn triangle() {
        let order = order_of(&[1, 2, 3], &[&[1, 2], &[2, 3], &[1, 3]]).expect("order");
        assert_eq!(order.as_slice(), attrs(&[2, 1, 3]).as_slice());
    }

    #[test]
    fn single_relation() {
        let order = order_of(&[1, 2], &[&[1, 2]]).expect("order");
        assert_eq!(order.as_slice(), attrs(&[1, 2]).as_slice());
    }

    #[test]
    fn disjoint_relation_is_rejected() {
        assert_eq!(
            order_of(&[1, 2], &[&[3, 4]]),
            Err(OptimizerError::EmptyPartitionTree)
        );
        assert_eq!(
            extract_total_order(None),
            Err(OptimizerError::EmptyPartitionTree)
        );
    }

    #[test]
    fn cycles() {
        let four = order_of(&[1, 2, 3, 4], &[&[1, 2], &[2, 3], &[3, 4], &[4, 1]]).expect("order");
        assert_eq!(four.as_slice(), attrs(&[2, 3, 1, 4]).as_slice());

        let five = order_of(
            &[1, 2, 3, 4, 5],
            &[&[1, 2], &[2, 3], &[3, 4], &[4, 5], &[5, 1]],
        )
        .expect("order");
        assert_eq!(five.as_slice(), attrs(&[2, 3, 4, 1, 5]).as_slice());
    }

    #[test]
    fn right_pruned_attributes_are_recovered() {
        // R2 = {2} splits {1, 2, 9}: the inside half {2} misses R1 and is pruned,
        // 2 is appended after the left subtree.
        let order = order_of(&[1, 2, 9], &[&[1], &[2]]).expect("order");
        assert_eq!(order.as_slice(), attrs(&[1, 9, 2]).as_slice());
    }

    #[test]
    fn left_pruned_attributes_are_dropped() {
        // 2 is only bound by R3, which is peeled first; below that the outside
        // half {2} of R2 = {1} is disjoint from R1 and gets pruned.
        let order = order_of(&[1, 2], &[&[1], &[1], &[1, 2]]).expect("order");
        assert_eq!(order.as_slice(), attrs(&[1]).as_slice());
        let cov = order.coverage(&set(&[1, 2]));
        assert_eq!(cov.missing, attrs(&[2]));
    }

    #[test]
    fn permutation_on_covered_inputs() {
        let cases: Vec<(Vec<usize>, Vec<Vec<usize>>)> = vec![
            (
                (1..=6).collect(),
                vec![
                    vec![1, 2, 4, 5],
                    vec![1, 3, 4, 6],
                    vec![1, 2, 3],
                    vec![2, 4, 6],
                    vec![3, 5, 6],
                ],
            ),
            (
                (1..=8).collect(),
                vec![
                    vec![1, 2, 4, 5],
                    vec![1, 3, 4, 6],
                    vec![2, 3, 6, 7],
                    vec![7, 4, 5, 8],
                ],
            ),
            ((1..=4).collect(), vec![vec![1, 2], vec![3, 4]]),
        ];
        for (universe, edges) in cases {
            let edges: Vec<&[usize]> = edges.iter().map(Vec::as_slice).collect();
            let order = order_of(&universe, &edges).expect("order");
            let cov = order.coverage(&set(&universe));
            assert!(cov.is_complete(), "{:?} for {:?}", cov, edges);
            assert_eq!(order.len(), universe.len());
        }
    }

    #[test]
    fn deterministic() {
        let edges: &[&[usize]] = &[&[1, 2, 4, 5], &[1, 3, 4, 6], &[2, 3, 6, 7], &[7, 4, 5, 8]];
        let universe: Vec<usize> = (1..=8).collect();
        let a = order_of(&universe, edges).expect("order");
        let b = order_of(&universe, edges).expect("order");
        assert_eq!(a, b);
        assert_eq!(a.as_slice(), attrs(&[1, 2, 3, 6, 5, 8, 4, 7]).as_slice());
    }

    #[test]
    fn leaf_attributes_are_contiguous() {
        let edges: &[&[usize]] = &[
            &[1, 2, 4, 5],
            &[1, 3, 4, 6],
            &[1, 2, 3],
            &[2, 4, 6],
            &[3, 5, 6],
        ];
        let universe: Vec<usize> = (1..=6).collect();
        let relations: Vec<Relation> = edges
            .iter()
            .enumerate()
            .map(|(i, e)| Relation::new(format!("R{}", i + 1), e.iter().copied()))
            .collect();
        let root = build_partition_tree(&set(&universe), &relations)
            .expect("relations present")
            .expect("universe is relevant");
        let order = extract_total_order(Some(&root)).expect("order");

        for leaf in root.leaves() {
            let mut positions: Vec<usize> = leaf
                .universe()
                .iter()
                .map(|&a| order.position(a).expect("leaf attribute ordered"))
                .collect();
            positions.sort_unstable();
            for pair in positions.windows(2) {
                assert_eq!(pair[0] + 1, pair[1], "leaf {:?} is split", leaf.universe());
            }
        }
    }
}
