//! Public address sources.

mod fixed;
mod ipify;

pub use fixed::StaticIpSource;
pub use ipify::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, IpifySource};
