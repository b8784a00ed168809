//! SolverPolicy v1: pairing strategy and bucket parallelism.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::canonical::canonical_hash_hex;
use crate::compose::VerticalPairing;
use crate::DEFAULT_POLICY_VERSION;

/// Default number of buckets below which ordering stays sequential.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4;

/// Error loading a policy.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Policy file could not be read.
    #[error("Failed to read policy file {path}: {source}")]
    Io {
        /// File that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Policy JSON is malformed.
    #[error("Invalid policy JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parameters hashed into every deck.
///
/// Parallelism is left out: it never changes the output.
#[derive(Serialize)]
struct HashedPolicyParams<'a> {
    version: &'a str,
    vertical_pairing: VerticalPairing,
}

/// Solver policy version 1.
///
/// ## Parameters
///
/// - `vertical_pairing`: How vertical photos are paired into slides
/// - `parallel`: Whether buckets are ordered on the rayon pool
/// - `parallel_threshold`: Minimum number of buckets before going parallel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverPolicy {
    /// Policy version identifier.
    pub version: String,
    /// Vertical pairing strategy.
    pub vertical_pairing: VerticalPairing,
    /// Order buckets in parallel.
    pub parallel: bool,
    /// Minimum non-empty buckets for parallel ordering.
    pub parallel_threshold: usize,
}

impl SolverPolicy {
    /// Create a policy with the given pairing and default parallelism.
    pub fn new(vertical_pairing: VerticalPairing) -> Self {
        Self {
            vertical_pairing,
            ..Self::default()
        }
    }

    /// Sequential variant of the default policy.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Get the policy ID.
    pub fn policy_id(&self) -> &str {
        &self.version
    }

    /// Hash of the output-affecting parameters.
    pub fn params_hash(&self) -> String {
        canonical_hash_hex(&HashedPolicyParams {
            version: &self.version,
            vertical_pairing: self.vertical_pairing,
        })
    }

    /// Parse a policy from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a policy from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl Default for SolverPolicy {
    fn default() -> Self {
        Self {
            version: DEFAULT_POLICY_VERSION.to_string(),
            vertical_pairing: VerticalPairing::FirstSecond,
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_hash_determinism() {
        assert_eq!(SolverPolicy::default().params_hash(), SolverPolicy::default().params_hash());
    }

    #[test]
    fn test_params_hash_ignores_parallelism() {
        assert_eq!(SolverPolicy::default().params_hash(), SolverPolicy::sequential().params_hash());
    }

    #[test]
    fn test_params_hash_changes_with_pairing() {
        let first_second = SolverPolicy::new(VerticalPairing::FirstSecond);
        let last_first = SolverPolicy::new(VerticalPairing::LastFirst);
        assert_ne!(first_second.params_hash(), last_first.params_hash());
    }

    #[test]
    fn test_from_json_partial() {
        let policy = SolverPolicy::from_json_str(r#"{"vertical_pairing": "last_first"}"#).unwrap();
        assert_eq!(policy.vertical_pairing, VerticalPairing::LastFirst);
        assert!(policy.parallel);
        assert_eq!(policy.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert_eq!(policy.policy_id(), DEFAULT_POLICY_VERSION);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = SolverPolicy::from_json_str(r#"{"vertical_pairing": "zigzag"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SolverPolicy::from_json_file("/nonexistent/policy.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
