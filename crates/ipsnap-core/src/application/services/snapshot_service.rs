//! Snapshot Service - main application orchestrator.
//!
//! This service coordinates the whole workflow:
//! 1. Fetch the public address from the [`IpSource`]
//! 2. Persist its bytes through the [`OutputSink`]
//!
//! The first failure ends the run. Nothing is retried and the sink is never
//! reached when the fetch fails.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{IpSource, OutputSink},
    domain::OutputDestination,
    error::IpsnapResult,
};

/// Fetch the public address once and persist it once.
///
/// The payload handed to `sink` is the exact byte encoding of the fetched
/// string, and `destination` is forwarded unchanged. Errors from either
/// collaborator come back verbatim, tagged with the step that failed.
#[instrument(
    skip_all,
    fields(destination = %destination.path().display(), mode = %destination.mode())
)]
pub fn execute<S, O>(source: &S, sink: &O, destination: &OutputDestination) -> IpsnapResult<()>
where
    S: IpSource + ?Sized,
    O: OutputSink + ?Sized,
{
    let ip = source.fetch()?;
    debug!(ip = %ip, "Public address fetched");

    sink.persist(destination, ip.as_bytes())?;
    info!(ip = %ip, "Public address persisted");

    Ok(())
}

/// Snapshot service owning its collaborators.
///
/// Useful when the adapters are chosen at runtime and the same pair is run
/// against several destinations.
pub struct SnapshotService {
    source: Box<dyn IpSource>,
    sink: Box<dyn OutputSink>,
}

impl SnapshotService {
    /// Create a new snapshot service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use ipsnap_core::application::SnapshotService;
    ///
    /// let service = SnapshotService::new(
    ///     source, // impl IpSource
    ///     sink,   // impl OutputSink
    /// );
    /// ```
    pub fn new(source: Box<dyn IpSource>, sink: Box<dyn OutputSink>) -> Self {
        Self { source, sink }
    }

    /// Run one fetch-then-persist cycle into `destination`.
    pub fn snapshot(&self, destination: &OutputDestination) -> IpsnapResult<()> {
        execute(self.source.as_ref(), self.sink.as_ref(), destination)
    }
}
