//! Binary partition tree over the attribute universe.
use catalog::Attribute;
use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt;

/// A node of the binary decomposition tree.
///
/// `label` is the number of relations (counted from the start of the
/// relation list) that were under consideration when the node was created.
/// A node is a leaf iff both children are absent; an absent child means the
/// corresponding attribute subset was pruned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionNode {
    label: usize,
    universe: BTreeSet<Attribute>,
    left_child: Option<Box<PartitionNode>>,
    right_child: Option<Box<PartitionNode>>,
}

impl PartitionNode {
    pub(crate) fn new(
        label: usize,
        universe: BTreeSet<Attribute>,
        left_child: Option<PartitionNode>,
        right_child: Option<PartitionNode>,
    ) -> Self {
        Self {
            label,
            universe,
            left_child: left_child.map(Box::new),
            right_child: right_child.map(Box::new),
        }
    }

    /// Number of relations considered when this node was created.
    pub fn label(&self) -> usize {
        self.label
    }

    /// Attributes this node is responsible for ordering.
    pub fn universe(&self) -> &BTreeSet<Attribute> {
        &self.universe
    }

    /// Subtree over the attributes outside the peeled relation.
    pub fn left_child(&self) -> Option<&PartitionNode> {
        self.left_child.as_deref()
    }

    /// Subtree over the attributes inside the peeled relation.
    pub fn right_child(&self) -> Option<&PartitionNode> {
        self.right_child.as_deref()
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left_child.is_none() && self.right_child.is_none()
    }

    /// Height of the subtree rooted here; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .map(PartitionNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes in the subtree rooted here.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(PartitionNode::node_count).sum::<usize>()
    }

    /// Leaves of the subtree in left-to-right order.
    pub fn leaves(&self) -> Vec<&PartitionNode> {
        let mut acc = Vec::new();
        self.collect_leaves(&mut acc);
        acc
    }

    fn collect_leaves<'a>(&'a self, acc: &mut Vec<&'a PartitionNode>) {
        if self.is_leaf() {
            acc.push(self);
            return;
        }
        for child in self.children() {
            child.collect_leaves(acc);
        }
    }

    /// Present children, left first.
    fn children(&self) -> impl Iterator<Item = &PartitionNode> {
        self.left_child().into_iter().chain(self.right_child())
    }
}

impl fmt::Display for PartitionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn print_tree(
            f: &mut fmt::Formatter<'_>,
            node: Option<&PartitionNode>,
            prefix: &str,
            last: bool,
        ) -> fmt::Result {
            let branch = if last { "└── " } else { "├── " };
            let Some(node) = node else {
                return writeln!(f, "{}{}∅", prefix, branch);
            };
            writeln!(
                f,
                "{}{}{} {{{}}}",
                prefix,
                branch,
                node.label,
                node.universe.iter().join(", ")
            )?;
            if node.is_leaf() {
                return Ok(());
            }
            let new_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
            print_tree(f, node.left_child(), &new_prefix, false)?;
            print_tree(f, node.right_child(), &new_prefix, true)
        }

        print_tree(f, Some(self), "", true)
    }
}
