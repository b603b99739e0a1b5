//! Scheduler error types.

use thiserror::Error;

/// Fault type returned by actions and delay sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SchedError {
    /// The handle does not name a pending event: it was never scheduled
    /// here, already ran, or was already cancelled.
    #[error("event #{sequence} is not pending")]
    NotFound { sequence: u64 },

    #[error("action of event #{sequence} failed: {source}")]
    Action {
        sequence: u64,
        #[source]
        source: BoxError,
    },

    #[error("delay source failed: {0}")]
    Wait(#[source] BoxError),

    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, SchedError>;
