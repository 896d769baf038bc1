//! In-memory sink for testing.

use std::sync::{Arc, PoisonError, RwLock};

use ipsnap_core::{
    application::{PersistError, ports::OutputSink},
    domain::OutputDestination,
};

/// One recorded `persist` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub destination: OutputDestination,
    pub payload: Vec<u8>,
}

/// In-memory sink that records every call.
///
/// Clones share the same record, so a test can box one clone into a service
/// and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<RwLock<MemorySinkInner>>,
}

#[derive(Debug, Default)]
struct MemorySinkInner {
    writes: Vec<RecordedWrite>,
    failure: Option<String>,
}

impl MemorySink {
    /// Create a sink that accepts every write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that records calls but fails each one with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        let sink = Self::new();
        sink.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .failure = Some(reason.into());
        sink
    }

    /// All calls in the order they arrived.
    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .writes
            .clone()
    }

    /// Number of `persist` calls so far.
    pub fn call_count(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .writes
            .len()
    }
}

impl OutputSink for MemorySink {
    fn persist(
        &self,
        destination: &OutputDestination,
        payload: &[u8],
    ) -> Result<(), PersistError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| PersistError::new(destination.path(), "memory sink lock poisoned"))?;

        inner.writes.push(RecordedWrite {
            destination: destination.clone(),
            payload: payload.to_vec(),
        });

        match &inner.failure {
            Some(reason) => Err(PersistError::new(destination.path(), reason.clone())),
            None => Ok(()),
        }
    }
}
