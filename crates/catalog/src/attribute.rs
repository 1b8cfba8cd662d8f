//! Attribute identifiers (join variables).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A join variable shared across relations, identified by number.
///
/// Ordering is numeric; every attribute set in the workspace enumerates in
/// ascending order of this id.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attribute(usize);

impl Attribute {
    /// Create a new attribute.
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Numeric identifier.
    #[inline]
    pub fn id(&self) -> usize {
        self.0
    }
}

impl From<usize> for Attribute {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate Debug to Display
        fmt::Display::fmt(self, f)
    }
}
