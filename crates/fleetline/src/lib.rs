//! Top-level facade crate for fleetline.
//!
//! Re-exports the protocol core and the exporter library so users can depend on a single crate.

pub mod core {
    pub use fleetline_core::*;
}

pub mod exporter {
    pub use fleetline_exporter::*;
}
