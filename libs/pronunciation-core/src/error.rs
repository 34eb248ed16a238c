//! Error types for pronunciation-core.

use thiserror::Error;

/// Result type alias using SpeechError.
pub type Result<T> = std::result::Result<T, SpeechError>;

/// Errors raised by speech capabilities and the practice orchestrator.
///
/// Scoring itself never fails; only capturing or playing speech can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("speech capability is not supported on this platform")]
    Unsupported,

    #[error("speech operation was cancelled")]
    Cancelled,

    #[error("no speech was captured")]
    NoSpeech,

    #[error("recognition failed: {0}")]
    Recognition(String),

    #[error("synthesis failed: {0}")]
    Synthesis(String),
}
