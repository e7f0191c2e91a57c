//! In-memory metric registry shared by all connection tasks and the
//! scrape path.
//!
//! Per-label gauge entries live in one `DashMap` per series, so concurrent
//! upserts from many connections proceed without a global lock. Lifetime
//! counters and timestamp gauges are plain atomics. The only cross-cutting
//! synchronization is the sweep guard: upserts hold its read side, and
//! [`Registry::snapshot_and_reset`] holds the write side across
//! copy + stamp + clear, so a sweep is a single exclusive section. An upsert
//! racing a sweep either lands before the copy (observed in that snapshot,
//! then wiped) or waits and survives into the next scrape window.

pub mod snapshot;

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use dashmap::DashMap;

use fleetline_core::protocol::{Labels, Sample, Series};
use fleetline_core::FleetlineError;

pub use snapshot::{SeriesValues, Snapshot};

/// Current values per (deployment, job, index, id) tuple for one series.
type GaugeMap = DashMap<Labels, f64>;

/// Process-wide metric state. `update` and `snapshot_and_reset` are the
/// only mutation/read entry points; label-map internals never leak out.
pub struct Registry {
    gauges: [GaugeMap; Series::COUNT],
    received: AtomicU64,
    invalid: AtomicU64,
    discarded: AtomicU64,
    last_received_timestamp: AtomicI64,
    last_scrape_timestamp: AtomicI64,
    last_scrape_duration: AtomicU64, // f64 bits
    sweep: RwLock<()>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            gauges: std::array::from_fn(|_| DashMap::new()),
            received: AtomicU64::new(0),
            invalid: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
            last_received_timestamp: AtomicI64::new(0),
            last_scrape_timestamp: AtomicI64::new(0),
            last_scrape_duration: AtomicU64::new(0f64.to_bits()),
            sweep: RwLock::new(()),
        }
    }

    /// Record one received line: bump the lifetime counter and stamp the
    /// last-received timestamp. Called once per line, before parsing.
    pub fn note_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
        self.last_received_timestamp
            .store(unix_now(), Ordering::Relaxed);
    }

    /// Record one unparseable line.
    pub fn note_invalid(&self) {
        self.invalid.fetch_add(1, Ordering::Relaxed);
    }

    /// Dispatch a parsed sample. A recognized name upserts the value at the
    /// sample's label tuple (last write wins); an unrecognized name bumps
    /// the discarded counter and is logged. Returns the matched series, if
    /// any.
    pub fn update(&self, sample: &Sample) -> Option<Series> {
        let Some(series) = Series::from_name(&sample.name) else {
            let err = FleetlineError::UnrecognizedMetric(sample.name.clone());
            tracing::error!(%err, "tsdb message dropped");
            self.discarded.fetch_add(1, Ordering::Relaxed);
            return None;
        };

        let _read = self.sweep.read().unwrap_or_else(PoisonError::into_inner);
        self.gauges[series.index()].insert(sample.labels.clone(), sample.value);
        Some(series)
    }

    /// Copy every current gauge entry plus the bookkeeping metrics, stamp
    /// the scrape timestamp and duration, then clear all per-label entries.
    /// Copy and clear happen inside one exclusive section; lifetime counters
    /// and timestamp gauges are never reset.
    pub fn snapshot_and_reset(&self) -> Snapshot {
        let begun = Instant::now();
        let _write = self.sweep.write().unwrap_or_else(PoisonError::into_inner);

        let gauges = Series::ALL.map(|series| SeriesValues {
            series,
            values: self.gauges[series.index()]
                .iter()
                .map(|entry| (entry.key().clone(), *entry.value()))
                .collect(),
        });

        let scrape_timestamp = unix_now();
        let scrape_duration = begun.elapsed().as_secs_f64();
        self.last_scrape_timestamp
            .store(scrape_timestamp, Ordering::Relaxed);
        self.last_scrape_duration
            .store(scrape_duration.to_bits(), Ordering::Relaxed);

        for map in &self.gauges {
            map.clear();
        }

        Snapshot {
            gauges,
            received_messages: self.received.load(Ordering::Relaxed),
            invalid_messages: self.invalid.load(Ordering::Relaxed),
            discarded_messages: self.discarded.load(Ordering::Relaxed),
            last_received_timestamp: self.last_received_timestamp.load(Ordering::Relaxed),
            scrape_timestamp,
            scrape_duration,
        }
    }

    /// Lifetime received-message count.
    pub fn received_total(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    /// Lifetime invalid-message count.
    pub fn invalid_total(&self) -> u64 {
        self.invalid.load(Ordering::Relaxed)
    }

    /// Lifetime discarded-message count.
    pub fn discarded_total(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
