//! Conditional logging macros for the layout pipeline.
//!
//! With the `tracing` feature, `debug!` and `warn!` are the `tracing` macros
//! and accept structured fields. Without it they expand to nothing, so the
//! solver carries no logging cost in default builds.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
