//! Error types.
//!
//! The search itself never fails: degenerate inputs fall back to empty or
//! unchanged results. Errors only arise from invalid configuration and, in the
//! command-line front end, from reading input files.

use thiserror::Error;

/// An invalid [`DiscoveryConfig`](crate::discovery::DiscoveryConfig) parameter.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid `{field}`: {reason}")]
pub struct ConfigError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable constraint that was violated.
    pub reason: String,
}

impl ConfigError {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Failure while loading transaction or catalogue records.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no transactions left after joining line items against the catalogue")]
    NoTransactions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::new("max_k", "must be at least 2");
        assert_eq!(err.to_string(), "invalid `max_k`: must be at least 2");
    }

    #[test]
    fn test_data_error_message() {
        assert_eq!(
            DataError::NoTransactions.to_string(),
            "no transactions left after joining line items against the catalogue"
        );
    }
}
