//! Crate-internal logging.
//!
//! `debug!` and `warn!` forward to `tracing` when the `tracing` feature is on
//! and compile to nothing otherwise. Neither is part of the public API:
//!
//! ```compile_fail
//! lsystem_maze::debug!("not exported");
//! ```

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! noop_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! noop_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {noop_debug as debug, noop_warn as warn};
