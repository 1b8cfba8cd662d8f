//! Shared common utilities for the variable ordering crates.

pub mod config;

pub use config::{Config, ConfigError, CoveragePolicy};

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Computes a fingerprint by hashing all identifying inputs together.
///
/// NOTE: Uses `DefaultHasher` which is deterministic within a build but not
/// guaranteed stable across Rust versions. Do not persist the value.
pub fn fingerprint<T: Hash>(t: T) -> u64 {
    let mut h = DefaultHasher::new();
    t.hash(&mut h);
    h.finish()
}
