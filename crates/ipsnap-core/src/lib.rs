//! ipsnap Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for ipsnap, a tool
//! that records the machine's public IP address into a file. Both side
//! effects (the network lookup and the file write) sit behind ports so the
//! orchestration can be tested without either.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           ipsnap-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    application::execute / Snapshot      │
//! │        fetch once, persist once         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    Application Ports (Traits)           │
//! │       IpSource, OutputSink              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   ipsnap-adapters (Infrastructure)      │
//! │ (IpifySource, LocalFileSink, doubles)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ipsnap_core::prelude::*;
//!
//! let destination = OutputDestination::new("public-ip.txt")?;
//! execute(&source, &sink, &destination)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FetchError, PersistError, SnapshotService, execute,
        ports::{IpSource, OutputSink},
    };
    pub use crate::domain::{DomainError, FileMode, OutputDestination, PublicIp};
    pub use crate::error::{ErrorCategory, IpsnapError, IpsnapResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
