//! Exporter config loader (strict parsing).

pub mod schema;

use std::fs;

use fleetline_core::error::{FleetlineError, Result};

pub use schema::{AuthSection, ExporterConfig, IngestSection, MetricsSection, WebSection};

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| FleetlineError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| FleetlineError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
