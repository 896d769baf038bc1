//! Core domain layer for ipsnap.
//!
//! Pure values with no I/O. The network lookup and the file write are
//! reached only through the ports in `crate::application::ports`.

pub mod error;
pub mod value_objects;

pub use error::{DomainError, ErrorCategory};
pub use value_objects::{FileMode, OutputDestination, PublicIp};
