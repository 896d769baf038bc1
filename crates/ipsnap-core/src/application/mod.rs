//! Application layer for ipsnap.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`execute`, `SnapshotService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Collaborator error types
//!
//! The application layer coordinates ports but performs no I/O itself.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{SnapshotService, execute};

// Re-export port traits (for adapter implementation)
pub use ports::{IpSource, OutputSink};

pub use error::{FetchError, PersistError};
