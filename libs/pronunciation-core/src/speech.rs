//! Speech recognition and synthesis capabilities.
//!
//! The platform provides these (browser speech APIs, a native recognizer,
//! a TTS engine). Scoring never touches them; only the practice
//! orchestrator does.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Language;

/// Final transcript of a single utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    /// Recognizer confidence, 0.0 to 1.0. Not used for scoring.
    pub confidence: f32,
}

impl Transcript {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }

    /// Whether nothing usable was captured.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Produces the final transcript of one utterance.
pub trait SpeechRecognizer: Send + Sync {
    /// Listen for a single utterance in `language`.
    ///
    /// Resolves to `SpeechError::Cancelled` if `cancel` is called while
    /// listening.
    fn recognize(&self, language: Language) -> impl Future<Output = Result<Transcript>> + Send;

    /// Stop an in-flight recognition.
    fn cancel(&self);

    fn is_supported(&self) -> bool {
        true
    }
}

/// Speaks text aloud.
pub trait SpeechSynthesizer: Send + Sync {
    fn speak(&self, text: &str, language: Language) -> impl Future<Output = Result<()>> + Send;

    /// Stop any in-flight utterance.
    fn cancel(&self);

    fn is_supported(&self) -> bool {
        true
    }
}

/// Clean text before handing it to a recognizer or synthesizer.
///
/// Drops punctuation, collapses whitespace runs, trims and lower-cases.
pub fn clean_text_for_speech(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
