//! Conditional logging macros.
//!
//! The crate emits two kinds of events: a `debug!` per painting-session
//! start (shape box and derived scale factors, plus one per lazily-built
//! kind set) and a `warn!` when a session's fitted size comes out
//! non-finite and painting is about to emit degenerate coordinates.
//! With the `tracing` feature enabled these macros are `tracing`'s;
//! without it they expand to nothing and the call sites cost nothing.

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
