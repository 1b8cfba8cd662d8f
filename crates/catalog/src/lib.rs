//! Catalog Library
//!
//! This crate describes the input of the variable ordering: attributes
//! (join variables), relations binding sets of attributes, and the
//! validated [`Hypergraph`] pairing a relation list with its attribute
//! universe.

/// Attribute identifiers.
pub mod attribute;
/// Catalog errors.
pub mod error;
/// Hypergraph construction and precondition checks.
pub mod hypergraph;
/// Relation descriptors.
pub mod relation;
/// Sample cyclic queries.
pub mod samples;

/// Re-exported.
pub use attribute::Attribute;
pub use error::{CatalogError, Result};
pub use hypergraph::{validate, Hypergraph};
pub use relation::Relation;
pub use samples::Sample;
