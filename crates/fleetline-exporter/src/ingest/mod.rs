//! TSDB ingest: accept loop and per-connection line handler.
//!
//! One task per accepted connection, unbounded. A handler reads
//! newline-delimited messages until the peer closes or the read errors;
//! protocol errors never close the connection, and the peer is responsible
//! for reconnecting. Accept failures are retried under an explicit
//! [`AcceptRetry`] policy instead of a bare busy-loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use fleetline_core::error::Result;
use fleetline_core::protocol::parse_line;

use crate::registry::Registry;

/// Accept-loop retry policy.
#[derive(Debug, Clone, Copy)]
pub struct AcceptRetry {
    /// Delay applied after each accept failure.
    pub backoff: Duration,
    /// Consecutive failures before giving up; 0 retries forever.
    pub max_consecutive_failures: u32,
}

impl Default for AcceptRetry {
    fn default() -> Self {
        Self {
            backoff: Duration::from_millis(500),
            max_consecutive_failures: 0,
        }
    }
}

/// Accept connections until the listener fails past the retry policy.
///
/// Each accepted connection gets its own task; the loop resumes accepting
/// immediately. Returns only when `retry.max_consecutive_failures` is hit
/// (never, under the default policy).
pub async fn run(
    listener: TcpListener,
    registry: Arc<Registry>,
    retry: AcceptRetry,
) -> Result<()> {
    let mut consecutive_failures: u32 = 0;
    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                consecutive_failures = 0;
                let registry = Arc::clone(&registry);
                tokio::spawn(async move {
                    tracing::debug!(%peer, "tsdb connection accepted");
                    if let Err(err) = handle_connection(stream, &registry).await {
                        tracing::debug!(%peer, error = %err, "tsdb connection closed with error");
                    } else {
                        tracing::debug!(%peer, "tsdb connection closed");
                    }
                });
            }
            Err(err) => {
                tracing::error!(error = %err, "error accepting tsdb connection");
                consecutive_failures += 1;
                if retry.max_consecutive_failures != 0
                    && consecutive_failures >= retry.max_consecutive_failures
                {
                    return Err(err.into());
                }
                if !retry.backoff.is_zero() {
                    tokio::time::sleep(retry.backoff).await;
                }
            }
        }
    }
}

/// Read one connection as newline-delimited messages and fold each into
/// the registry. Runs until end-of-stream or an I/O error; malformed or
/// unrecognized messages only count and log.
async fn handle_connection(stream: TcpStream, registry: &Registry) -> Result<()> {
    let mut lines = BufReader::new(stream).lines();
    while let Some(line) = lines.next_line().await? {
        registry.note_received();
        match parse_line(&line) {
            Ok(sample) => {
                // Unrecognized names are counted and logged inside update.
                let _ = registry.update(&sample);
            }
            Err(err) => {
                registry.note_invalid();
                tracing::error!(%err, %line, "invalid tsdb message");
            }
        }
    }
    Ok(())
}
