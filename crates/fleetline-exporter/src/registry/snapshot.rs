//! Scrape snapshot and its text exposition rendering.

use std::fmt::Write;

use fleetline_core::protocol::{Labels, Series};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Current entries of one series at scrape time.
#[derive(Debug, Clone)]
pub struct SeriesValues {
    pub series: Series,
    pub values: Vec<(Labels, f64)>,
}

/// Everything one scrape emits: the per-label gauge entries of all series,
/// the lifetime counters, and the bookkeeping gauges.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Aligned with [`Series::ALL`].
    pub gauges: [SeriesValues; Series::COUNT],
    pub received_messages: u64,
    pub invalid_messages: u64,
    pub discarded_messages: u64,
    /// Unix seconds of the last received line, 0 if none yet.
    pub last_received_timestamp: i64,
    /// Unix seconds at which this snapshot was taken.
    pub scrape_timestamp: i64,
    /// Wall time of the emission step, in seconds.
    pub scrape_duration: f64,
}

impl Snapshot {
    /// Render in Prometheus text exposition format.
    ///
    /// `namespace` prefixes every metric name and `environment` becomes a
    /// static label on every line; both are skipped when empty. Series with
    /// no entries render nothing, so a gauge wiped by the previous reset
    /// sweep is absent rather than zero.
    pub fn render(&self, namespace: &str, environment: &str) -> String {
        let mut out = String::new();

        for sv in &self.gauges {
            if sv.values.is_empty() {
                continue;
            }
            let name = metric_name(namespace, sv.series.export_name());
            let _ = writeln!(out, "# HELP {} {}", name, sv.series.help());
            let _ = writeln!(out, "# TYPE {} gauge", name);
            for (labels, value) in &sv.values {
                let _ = writeln!(
                    out,
                    "{}{{{}}} {}",
                    name,
                    gauge_labels(environment, labels),
                    value
                );
            }
        }

        render_counter(
            &mut out,
            namespace,
            environment,
            "received_messages_total",
            "Total number of received TSDB messages.",
            self.received_messages,
        );
        render_counter(
            &mut out,
            namespace,
            environment,
            "invalid_messages_total",
            "Total number of invalid TSDB messages.",
            self.invalid_messages,
        );
        render_counter(
            &mut out,
            namespace,
            environment,
            "discarded_messages_total",
            "Total number of discarded TSDB messages.",
            self.discarded_messages,
        );

        render_gauge(
            &mut out,
            namespace,
            environment,
            "last_received_message_timestamp",
            "Number of seconds since 1970 of the last received TSDB message.",
            self.last_received_timestamp as f64,
        );
        render_gauge(
            &mut out,
            namespace,
            environment,
            "last_scrape_timestamp",
            "Number of seconds since 1970 of the last scrape.",
            self.scrape_timestamp as f64,
        );
        render_gauge(
            &mut out,
            namespace,
            environment,
            "last_scrape_duration_seconds",
            "Duration of the last scrape.",
            self.scrape_duration,
        );

        out
    }
}

fn render_counter(
    out: &mut String,
    namespace: &str,
    environment: &str,
    base: &str,
    help: &str,
    value: u64,
) {
    let name = metric_name(namespace, base);
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} counter");
    let _ = writeln!(out, "{}{} {}", name, env_suffix(environment), value);
}

fn render_gauge(
    out: &mut String,
    namespace: &str,
    environment: &str,
    base: &str,
    help: &str,
    value: f64,
) {
    let name = metric_name(namespace, base);
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} gauge");
    let _ = writeln!(out, "{}{} {}", name, env_suffix(environment), value);
}

fn metric_name(namespace: &str, base: &str) -> String {
    if namespace.is_empty() {
        base.to_string()
    } else {
        format!("{namespace}_{base}")
    }
}

/// Label block for a per-tuple gauge line.
fn gauge_labels(environment: &str, labels: &Labels) -> String {
    let mut parts = Vec::with_capacity(5);
    if !environment.is_empty() {
        parts.push(format!("environment=\"{}\"", escape_label(environment)));
    }
    parts.push(format!("deployment=\"{}\"", escape_label(&labels.deployment)));
    parts.push(format!("job=\"{}\"", escape_label(&labels.job)));
    parts.push(format!("index=\"{}\"", escape_label(&labels.index)));
    parts.push(format!("id=\"{}\"", escape_label(&labels.id)));
    parts.join(",")
}

/// Label block for process-wide counters and gauges.
fn env_suffix(environment: &str) -> String {
    if environment.is_empty() {
        String::new()
    } else {
        format!("{{environment=\"{}\"}}", escape_label(environment))
    }
}
