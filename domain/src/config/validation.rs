//! Configuration validation results
//!
//! Validation never fails outright: it returns every issue it finds and the
//! caller decides what to do with errors versus warnings.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The run cannot start with this value.
    Error,
    /// The run works, but outside the range the simulator was tuned for.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    MemberCountZero,
    MemberCountOutOfRange,
    RoundCountOutOfRange,
    RoundCountAboveRecommended,
    SpokespersonCountZero,
    BatchSizeZero,
    ThresholdOutOfRange,
    JitterNegative,
    UnknownBackendKind,
    TimeoutZero,
}

/// A detected configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{level}: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let e = ConfigIssue::error(ConfigIssueCode::BatchSizeZero, "batch_size must be >= 1");
        assert!(e.is_error());
        assert_eq!(e.to_string(), "error: batch_size must be >= 1");

        let w = ConfigIssue::warning(ConfigIssueCode::MemberCountOutOfRange, "5000 members");
        assert!(!w.is_error());
        assert_eq!(w.code, ConfigIssueCode::MemberCountOutOfRange);
    }
}
