// ============================================================================
// domain/error.rs - VALUE CONSTRUCTION ERRORS
// ============================================================================

use thiserror::Error;

/// Errors raised while building domain values.
///
/// Cloneable and comparable so callers can match on them in tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Output destination must not be empty")]
    EmptyDestination,

    #[error("Invalid file mode '{value}': {reason}")]
    InvalidFileMode { value: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyDestination => vec![
                "Pass the output file as the first argument".into(),
                "Example: ipsnap ./public-ip.txt".into(),
            ],
            Self::InvalidFileMode { value, .. } => vec![
                format!("'{}' is not a valid permission mode", value),
                "Use octal Unix permission bits, e.g. 644 or 0600".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyDestination | Self::InvalidFileMode { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
