//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `ipsnap-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `IpSource`: public address lookup
//!   - `OutputSink`: persisting bytes to a destination

pub mod output;

pub use output::{IpSource, OutputSink};

#[cfg(test)]
pub use output::{MockIpSource, MockOutputSink};
