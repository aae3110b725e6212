//! Static network, token, and IBC channel configuration
//!
//! A read-only lookup table constructed once at startup and injected into
//! the transfer executors. No entry is mutated after construction.

pub mod registry;
pub mod types;

pub use registry::*;
pub use types::*;
