use crate::Attribute;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog error: at least one relation is required to order attributes")]
    EmptyRelationList,
    #[error("Catalog error: relation '{relation}' references attribute {attribute} outside the universe")]
    AttributeOutsideUniverse {
        relation: String,
        attribute: Attribute,
    },
    #[error("Catalog error: duplicate relation label '{0}'")]
    DuplicateRelationLabel(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
