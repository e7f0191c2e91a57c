//! fleetline exporter library entry.
//!
//! This crate wires the ingest listener, metric registry, scrape
//! coordinator, and web endpoint into a cohesive exporter stack. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod ingest;
pub mod registry;
pub mod scrape;
pub mod web;
