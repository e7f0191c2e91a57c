use serde::Deserialize;

use fleetline_core::error::{FleetlineError, Result};

use crate::ingest::AcceptRetry;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub metrics: MetricsSection,

    #[serde(default)]
    pub ingest: IngestSection,

    #[serde(default)]
    pub web: WebSection,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FleetlineError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.ingest.validate()?;
        self.web.validate()?;

        Ok(())
    }
}

/// Namespace prefix and static environment label attached to every
/// exported metric. Both default to empty, which omits them entirely.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default)]
    pub namespace: String,

    #[serde(default)]
    pub environment: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestSection {
    #[serde(default = "default_ingest_listen")]
    pub listen: String,

    /// Delay between retries after an accept failure.
    #[serde(default = "default_accept_backoff_ms")]
    pub accept_backoff_ms: u64,

    /// Consecutive accept failures before the listener gives up.
    /// 0 means retry forever.
    #[serde(default)]
    pub accept_max_failures: u32,
}

impl Default for IngestSection {
    fn default() -> Self {
        Self {
            listen: default_ingest_listen(),
            accept_backoff_ms: default_accept_backoff_ms(),
            accept_max_failures: 0,
        }
    }
}

impl IngestSection {
    pub fn validate(&self) -> Result<()> {
        if self.accept_backoff_ms > 60_000 {
            return Err(FleetlineError::Config(
                "ingest.accept_backoff_ms must be at most 60000".into(),
            ));
        }
        Ok(())
    }

    /// Accept-loop retry policy derived from this section.
    pub fn retry(&self) -> AcceptRetry {
        AcceptRetry {
            backoff: std::time::Duration::from_millis(self.accept_backoff_ms),
            max_consecutive_failures: self.accept_max_failures,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebSection {
    #[serde(default = "default_web_listen")]
    pub listen: String,

    #[serde(default = "default_telemetry_path")]
    pub telemetry_path: String,

    #[serde(default)]
    pub auth: Option<AuthSection>,
}

impl Default for WebSection {
    fn default() -> Self {
        Self {
            listen: default_web_listen(),
            telemetry_path: default_telemetry_path(),
            auth: None,
        }
    }
}

impl WebSection {
    pub fn validate(&self) -> Result<()> {
        if !self.telemetry_path.starts_with('/') {
            return Err(FleetlineError::Config(
                "web.telemetry_path must start with `/`".into(),
            ));
        }
        if self.telemetry_path == "/" {
            return Err(FleetlineError::Config(
                "web.telemetry_path must not shadow the landing page".into(),
            ));
        }
        if let Some(auth) = &self.auth {
            if auth.username.is_empty() || auth.password.is_empty() {
                return Err(FleetlineError::Config(
                    "web.auth requires both username and password".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Basic auth credentials for the metrics endpoint.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    pub username: String,
    pub password: String,
}

fn default_ingest_listen() -> String {
    "0.0.0.0:13321".into()
}
fn default_web_listen() -> String {
    "0.0.0.0:9194".into()
}
fn default_telemetry_path() -> String {
    "/metrics".into()
}
fn default_accept_backoff_ms() -> u64 {
    500
}
