//! Infrastructure adapters for ipsnap.
//!
//! This crate implements the ports defined in `ipsnap-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod ip_source;
pub mod sink;

// Re-export commonly used adapters
pub use ip_source::{IpifySource, StaticIpSource};
pub use sink::{LocalFileSink, MemorySink, RecordedWrite};
