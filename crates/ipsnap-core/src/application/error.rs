//! Collaborator errors.
//!
//! Each port reports a single error type. The orchestrator relays them
//! untouched; the variants below only exist so adapters can say *what* went
//! wrong for the person reading the message.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Failure to obtain the public address from an [`IpSource`](super::ports::IpSource).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("IP lookup request failed: {reason}")]
    Transport { reason: String },

    /// The lookup service answered with a non-success status.
    #[error("IP lookup service returned HTTP {status}")]
    Status { status: u16 },

    /// The response body could not be decoded.
    #[error("IP lookup response could not be decoded: {reason}")]
    Decode { reason: String },

    /// The decoded response lacked the expected field.
    #[error("IP lookup response has no '{field}' field")]
    MissingField { field: &'static str },
}

impl FetchError {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Transport { .. } => vec![
                "Check your network connection".into(),
                "Try again with a longer --timeout".into(),
            ],
            Self::Status { status } => vec![
                format!("The lookup service responded with status {}", status),
                "Try again later or point --endpoint at another service".into(),
            ],
            Self::Decode { .. } | Self::MissingField { .. } => vec![
                "The endpoint must return JSON like {\"ip\": \"203.0.113.7\"}".into(),
                "Check the configured lookup endpoint".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Network
    }
}

/// Failure to write the payload through an [`OutputSink`](super::ports::OutputSink).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to write {path}: {reason}")]
pub struct PersistError {
    pub path: PathBuf,
    pub reason: String,
}

impl PersistError {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        vec![
            format!("Failed to write: {}", self.path.display()),
            "Check that you have write permissions".into(),
            "Ensure the parent directory exists".into(),
        ]
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Storage
    }
}
