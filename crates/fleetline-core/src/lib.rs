//! fleetline core: wire-level protocol primitives and error types.
//!
//! This crate defines the TSDB line format and the series catalog shared by
//! the exporter runtime and its tests. It intentionally carries no transport
//! or runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `FleetlineError`/`Result` so a stream
//! of malformed monitoring traffic can never crash the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{FleetlineError, Result};
