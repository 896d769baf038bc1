//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ipsnap-adapters` crate provides implementations.

use crate::application::{FetchError, PersistError};
use crate::domain::{OutputDestination, PublicIp};

/// Port for discovering the machine's public address.
///
/// Implemented by:
/// - `ipsnap_adapters::ip_source::IpifySource` (production, HTTPS lookup)
/// - `ipsnap_adapters::ip_source::StaticIpSource` (testing)
///
/// The lookup endpoint belongs to the implementer, not to this contract.
#[cfg_attr(test, mockall::automock)]
pub trait IpSource: Send + Sync {
    /// Retrieve the current public address.
    fn fetch(&self) -> Result<PublicIp, FetchError>;
}

/// Port for persisting a payload.
///
/// Implemented by:
/// - `ipsnap_adapters::sink::LocalFileSink` (production)
/// - `ipsnap_adapters::sink::MemorySink` (testing)
///
/// A successful return means the write has completed.
#[cfg_attr(test, mockall::automock)]
pub trait OutputSink: Send + Sync {
    /// Write `payload` to `destination` using its permission mode.
    fn persist(
        &self,
        destination: &OutputDestination,
        payload: &[u8],
    ) -> Result<(), PersistError>;
}
