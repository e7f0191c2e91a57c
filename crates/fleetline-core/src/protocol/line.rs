//! Line parsing (panic-free).
//!
//! Parsing rules:
//! - Split on single ASCII space, never on arbitrary whitespace.
//! - Never index past the 4-token minimum without checking.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.

use crate::error::{FleetlineError, Result};

/// The (deployment, job, index, id) tuple identifying one monitored
/// job instance. Missing tags default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Labels {
    pub deployment: String,
    pub job: String,
    pub index: String,
    pub id: String,
}

/// One parsed protocol line. Transient: folded into the registry and
/// discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Metric name as sent on the wire (e.g. `system.healthy`).
    pub name: String,
    /// Sampled value.
    pub value: f64,
    /// Instance label tuple.
    pub labels: Labels,
}

/// Parse one protocol line into a [`Sample`].
///
/// Token layout: `<command> <metric-name> <timestamp> <value> [<key>=<val> ...]`.
/// The command token is consumed and ignored; the timestamp token is required
/// structurally (it counts toward the 4-token minimum) but dropped without
/// being parsed, so a non-numeric timestamp never fails a message.
///
/// Tags after the value are split on the first `=`. Tokens without an `=` and
/// unrecognized keys are silently ignored; a duplicated key keeps its last
/// occurrence.
pub fn parse_line(line: &str) -> Result<Sample> {
    tracing::trace!(%line, "parsing tsdb message");

    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() < 4 {
        return Err(FleetlineError::MalformedMessage(line.to_string()));
    }

    let name = tokens[1].to_string();
    let value: f64 = tokens[3]
        .parse()
        .map_err(|_| FleetlineError::InvalidValue(tokens[3].to_string()))?;

    let mut labels = Labels::default();
    for tag in &tokens[4..] {
        let Some((key, val)) = tag.split_once('=') else {
            continue;
        };
        match key {
            "deployment" => labels.deployment = val.to_string(),
            "job" => labels.job = val.to_string(),
            "index" => labels.index = val.to_string(),
            "id" => labels.id = val.to_string(),
            _ => {}
        }
    }

    Ok(Sample {
        name,
        value,
        labels,
    })
}
