//! Optimizer Library
//!
//! Computes a total variable order over the attributes of a join hypergraph
//! for worst-case optimal join engines, which intersect relations attribute
//! by attribute and need one global attribute order.
//!
//! The order comes from a binary partition tree: [`TreeBuilder`] peels off
//! one relation at a time, last relation first, splitting the attribute
//! universe into the part outside and the part inside that relation.
//! [`OrderExtractor`] flattens the tree depth-first into a [`TotalOrder`].
//! [`Optimizer`] runs both steps and reorders every relation by the result.
//!
//! # Example
//! ```rust
//! use catalog::{Hypergraph, Relation};
//! use optimizer::Optimizer;
//!
//! let triangle = Hypergraph::new(
//!     [1usize, 2, 3],
//!     vec![
//!         Relation::new("R1", [1usize, 2]),
//!         Relation::new("R2", [2usize, 3]),
//!         Relation::new("R3", [1usize, 3]),
//!     ],
//! )
//! .unwrap();
//!
//! let plan = Optimizer::default().plan(&triangle).unwrap();
//! assert_eq!(plan.total_order().to_string(), "[2, 1, 3]");
//! ```

pub mod builder;
pub mod error;
pub mod extractor;
pub mod optimizer;
pub mod partition_tree;
pub mod plan;
pub mod total_order;

pub use builder::{build_partition_tree, TreeBuilder};
pub use error::{OptimizerError, Result};
pub use extractor::{extract_total_order, OrderExtractor};
pub use optimizer::Optimizer;
pub use partition_tree::PartitionNode;
pub use plan::{RelationOrder, VariableOrderPlan};
pub use total_order::{Coverage, TotalOrder};
