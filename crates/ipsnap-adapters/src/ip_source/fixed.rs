//! Scripted address source for tests and offline runs.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use ipsnap_core::{
    application::{FetchError, ports::IpSource},
    domain::PublicIp,
};

/// [`IpSource`] that answers every call with a preset outcome.
///
/// Clones share the call counter, so a test can hand one clone to the
/// orchestrator and inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct StaticIpSource {
    outcome: Result<PublicIp, FetchError>,
    calls: Arc<AtomicUsize>,
}

impl StaticIpSource {
    /// Always return `ip`.
    pub fn returning(ip: impl Into<PublicIp>) -> Self {
        Self {
            outcome: Ok(ip.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Always fail with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self {
            outcome: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `fetch` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IpSource for StaticIpSource {
    fn fetch(&self) -> Result<PublicIp, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_calls_across_clones() {
        let source = StaticIpSource::returning("10.0.0.1");
        let handle = source.clone();

        assert_eq!(source.fetch().unwrap().as_str(), "10.0.0.1");
        assert_eq!(source.fetch().unwrap().as_str(), "10.0.0.1");
        assert_eq!(handle.calls(), 2);
    }

    #[test]
    fn failing_source_repeats_error() {
        let source = StaticIpSource::failing(FetchError::Status { status: 429 });
        assert_eq!(source.fetch(), Err(FetchError::Status { status: 429 }));
        assert_eq!(source.calls(), 1);
    }
}
