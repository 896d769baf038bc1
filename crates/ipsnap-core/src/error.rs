//! Unified error handling for ipsnap core.
//!
//! [`IpsnapError`] names the step that failed and carries the collaborator's
//! error unchanged, with user-actionable suggestions on top.

use thiserror::Error;

use crate::application::{FetchError, PersistError};
use crate::domain::DomainError;

/// Root error type for ipsnap core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IpsnapError {
    /// The public address could not be obtained.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The address could not be written to its destination.
    #[error("Persist failed: {0}")]
    Persist(#[from] PersistError),

    /// A domain value was rejected before anything ran.
    #[error("Invalid input: {0}")]
    Domain(#[from] DomainError),
}

impl IpsnapError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Fetch(e) => e.suggestions(),
            Self::Persist(e) => e.suggestions(),
            Self::Domain(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Fetch(e) => e.category(),
            Self::Persist(e) => e.category(),
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Network,
    Storage,
}

/// Convenient result type alias.
pub type IpsnapResult<T> = Result<T, IpsnapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_identifies_failing_step() {
        let fetch: IpsnapError = FetchError::Status { status: 500 }.into();
        let persist: IpsnapError = PersistError::new("out.txt", "read-only filesystem").into();

        assert_eq!(fetch.category(), ErrorCategory::Network);
        assert_eq!(persist.category(), ErrorCategory::Storage);
        assert!(fetch.to_string().starts_with("Fetch failed"));
        assert!(persist.to_string().starts_with("Persist failed"));
    }

    #[test]
    fn domain_errors_are_validation() {
        let err: IpsnapError = DomainError::EmptyDestination.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
