//! Error types for effect size analysis
//!
//! Provides a unified error type for all effect-stats crates.

use thiserror::Error;

/// Core error type for effect size operations
///
/// Every failure in this workspace is a rejected argument: an unknown
/// effect size label, a malformed sample, a missing column or a value outside
/// the domain of a conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument provided to a function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create a generic invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an error for an unrecognized effect size label
    pub fn unknown_kind(label: &str) -> Self {
        Self::InvalidArgument(format!("Could not interpret input '{label}'"))
    }

    /// Create an error for an empty sample
    pub fn empty_sample(name: &str) -> Self {
        Self::InvalidArgument(format!("{name} must contain at least one observation"))
    }

    /// Create an error for samples too small to pool their variances
    pub fn insufficient_dof(nx: usize, ny: usize) -> Self {
        Self::InvalidArgument(format!(
            "nx + ny must be greater than 2 to pool variances, got nx={nx}, ny={ny}"
        ))
    }

    /// Create an error for a value outside the domain of an effect size kind
    pub fn out_of_domain(kind: &str, value: f64, domain: &str) -> Self {
        Self::InvalidArgument(format!("{kind} value {value} must be in {domain}"))
    }

    /// Create an error for a missing or unusable column
    pub fn invalid_column(column: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("column '{column}': {reason}"))
    }

    /// Check whether this error rejects an argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
