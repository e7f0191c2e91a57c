//! Scrape coordination.
//!
//! A scrape is *idle* or *scraping*: the gate mutex is the state. Holding
//! it covers the whole emit-then-reset cycle, so concurrent scrape triggers
//! serialize instead of interleaving their reset sweeps.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::registry::{Registry, Snapshot};

pub struct ScrapeCoordinator {
    registry: Arc<Registry>,
    gate: Mutex<()>,
}

impl ScrapeCoordinator {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            gate: Mutex::new(()),
        }
    }

    /// Snapshot every current metric and perform the reset sweep. The sweep
    /// is unconditional: it runs exactly once per scrape even when no new
    /// data arrived.
    pub async fn scrape(&self) -> Snapshot {
        let _scraping = self.gate.lock().await;
        let snapshot = self.registry.snapshot_and_reset();
        tracing::debug!(
            received = snapshot.received_messages,
            invalid = snapshot.invalid_messages,
            discarded = snapshot.discarded_messages,
            duration_seconds = snapshot.scrape_duration,
            "scrape complete"
        );
        snapshot
    }
}
