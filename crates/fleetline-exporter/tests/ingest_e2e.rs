//! End-to-end ingest over a real socket.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};

use fleetline_core::protocol::Series;
use fleetline_exporter::ingest::{self, AcceptRetry};
use fleetline_exporter::registry::Registry;

async fn spawn_ingest(registry: Arc<Registry>) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = ingest::run(listener, registry, AcceptRetry::default()).await;
    });
    addr
}

/// Wait until the registry has seen `expected` lines (handlers run on
/// their own tasks, so arrival is asynchronous).
async fn wait_for_received(registry: &Registry, expected: u64) {
    for _ in 0..200 {
        if registry.received_total() >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!(
        "timed out waiting for {expected} received messages, got {}",
        registry.received_total()
    );
}

#[tokio::test]
async fn send_scrape_and_rescrape() {
    let registry = Arc::new(Registry::new());
    let addr = spawn_ingest(Arc::clone(&registry)).await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"put system.healthy 1700000000 1 deployment=d job=j index=0 id=x\n")
        .await
        .unwrap();
    stream.shutdown().await.unwrap();

    wait_for_received(&registry, 1).await;

    let snap = registry.snapshot_and_reset();
    assert_eq!(snap.received_messages, 1);
    let healthy = &snap.gauges[Series::Healthy.index()].values;
    assert_eq!(healthy.len(), 1);
    assert_eq!(healthy[0].0.deployment, "d");
    assert_eq!(healthy[0].1, 1.0);

    let snap = registry.snapshot_and_reset();
    assert!(snap.gauges[Series::Healthy.index()].values.is_empty());
    assert_eq!(snap.received_messages, 1);
}

#[tokio::test]
async fn bad_lines_count_without_closing_the_connection() {
    let registry = Arc::new(Registry::new());
    let addr = spawn_ingest(Arc::clone(&registry)).await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(
            b"put bogus.metric 1700000000 1 deployment=d job=j index=0 id=x\n\
              put invalid.tsdb.message 1700000000\n\
              put system.cpu.sys 1700000000 a\n\
              put system.load.1m 1700000000 0.01 job=j\n",
        )
        .await
        .unwrap();
    stream.shutdown().await.unwrap();

    wait_for_received(&registry, 4).await;

    assert_eq!(registry.received_total(), 4);
    assert_eq!(registry.discarded_total(), 1);
    assert_eq!(registry.invalid_total(), 2);

    // The handler kept reading after every bad line.
    let snap = registry.snapshot_and_reset();
    let load = &snap.gauges[Series::LoadAvg01.index()].values;
    assert_eq!(load.len(), 1);
    assert_eq!(load[0].1, 0.01);
}

#[tokio::test]
async fn concurrent_connections_share_the_registry() {
    let registry = Arc::new(Registry::new());
    let addr = spawn_ingest(Arc::clone(&registry)).await;

    let mut tasks = Vec::new();
    for i in 0..4 {
        tasks.push(tokio::spawn(async move {
            let mut stream = TcpStream::connect(addr).await.unwrap();
            let line = format!("put system.mem.kb 1700000000 1000 job=j index={i}\n");
            stream.write_all(line.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }

    wait_for_received(&registry, 4).await;

    let snap = registry.snapshot_and_reset();
    assert_eq!(snap.gauges[Series::MemKb.index()].values.len(), 4);
}
