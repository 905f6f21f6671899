//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A wall-clock time string was not zero-padded 24-hour `HH:MM`.
    #[error("Invalid time of day: '{0}' (expected zero-padded HH:MM)")]
    InvalidTime(String),

    /// An explicit appointment duration of zero minutes.
    #[error("Invalid appointment duration: {0} minutes")]
    InvalidDuration(u32),

    /// An explicit slot spacing of zero minutes.
    #[error("Invalid slot step: {0} minutes")]
    InvalidStep(u32),
}

pub type Result<T> = std::result::Result<T, EngineError>;
