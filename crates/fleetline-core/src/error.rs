//! Shared error type across fleetline crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, FleetlineError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum FleetlineError {
    /// Line has fewer than the four mandatory tokens.
    #[error("malformed message, fewer than 4 tokens: {0}")]
    MalformedMessage(String),
    /// Value token cannot be parsed as a 64-bit float.
    #[error("invalid value, `{0}` cannot be parsed as float")]
    InvalidValue(String),
    /// Well-formed message naming a series outside the catalog.
    #[error("metric `{0}` not supported, discarded")]
    UnrecognizedMetric(String),
    #[error("config: {0}")]
    Config(String),
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}

impl FleetlineError {
    /// Whether the error counts against the `invalid_messages_total`
    /// lifetime counter (as opposed to `discarded_messages_total`).
    pub fn is_invalid_message(&self) -> bool {
        matches!(
            self,
            FleetlineError::MalformedMessage(_) | FleetlineError::InvalidValue(_)
        )
    }
}
