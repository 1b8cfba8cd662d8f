use catalog::{Attribute, CatalogError};
use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptimizerError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Optimizer error: no relation intersects the universe, the partition tree is empty")]
    EmptyPartitionTree,
    #[error("Optimizer error: total order misses universe attributes [{}]", .missing.iter().join(", "))]
    UniverseNotFullyCovered { missing: Vec<Attribute> },
    #[error("Optimizer error: attribute {attribute} of relation '{relation}' is not in the total order")]
    AttributeNotOrdered {
        relation: String,
        attribute: Attribute,
    },
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
