//! Logging facade shared by the Affinity crates.

#[macro_use]
mod macros;

pub use log::{debug, error, info, log_enabled, trace, warn, Level};
