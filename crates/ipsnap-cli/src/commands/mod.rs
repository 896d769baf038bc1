//! Command handlers.

pub mod snapshot;
