//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "snapshot the public address to a file".

pub mod snapshot_service;

pub use snapshot_service::{SnapshotService, execute};
