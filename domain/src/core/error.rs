//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Only these errors are allowed to abort a simulation run. Everything that
/// can go wrong per member or per round is absorbed closer to the source and
/// surfaces as data (abstain votes, fallback amendment text).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("No districts are loaded; cannot sample a chamber")]
    NoDistricts,

    #[error("Cannot choose from an empty list")]
    EmptyInput,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DomainError {
    /// Whether this error happened before any member was sampled.
    pub fn is_sampling_error(&self) -> bool {
        matches!(self, DomainError::NoDistricts | DomainError::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_districts_display() {
        assert_eq!(
            DomainError::NoDistricts.to_string(),
            "No districts are loaded; cannot sample a chamber"
        );
    }

    #[test]
    fn test_is_sampling_error() {
        assert!(DomainError::NoDistricts.is_sampling_error());
        assert!(DomainError::EmptyInput.is_sampling_error());
        assert!(!DomainError::InvalidParameter("rounds".to_string()).is_sampling_error());
    }
}
