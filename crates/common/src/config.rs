//! Configuration for the variable ordering pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// What to do when the computed order misses attributes of the universe.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoveragePolicy {
    /// Log a warning and record the missing attributes in the plan.
    #[default]
    Warn,
    /// Reject the plan with an error.
    Deny,
}

impl fmt::Display for CoveragePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warn => write!(f, "warn"),
            Self::Deny => write!(f, "deny"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config error: invalid JSON document: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Settings shared by the optimizer library and its driver.
///
/// Every field has a default, so partial documents such as
/// `{"coverage": "deny"}` are accepted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reaction to an order that does not contain every universe attribute.
    pub coverage: CoveragePolicy,

    /// `tracing_subscriber::EnvFilter` directive used by the driver binary.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coverage: CoveragePolicy::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse a JSON configuration document.
    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Builder-style override of the coverage policy.
    #[must_use]
    pub fn with_coverage(mut self, coverage: CoveragePolicy) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn coverage(&self) -> CoveragePolicy {
        self.coverage
    }

    /// True if an uncovered universe must fail the plan.
    pub fn denies_uncovered(&self) -> bool {
        self.coverage == CoveragePolicy::Deny
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}
