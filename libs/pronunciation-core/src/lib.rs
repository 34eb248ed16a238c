//! Pronunciation practice core shared by the backend and any client shell.
//!
//! Provides:
//! - Accuracy scoring of a recognized utterance against a target word (Levenshtein distance)
//! - Tiered feedback with th / R-L hints
//! - Speech recognition and synthesis capability traits
//! - A practice orchestrator that ties the capabilities to the scorer
//! - Shared types (Language, AccuracyTier, PracticeSession, etc.)

pub mod error;
pub mod feedback;
pub mod practice;
pub mod scoring;
pub mod speech;
pub mod types;

pub use error::{Result, SpeechError};
pub use feedback::{
    classify_feedback, generate_feedback, generate_feedback_in, FeedbackKind, FeedbackLocale,
};
pub use practice::PronunciationCoach;
pub use scoring::{analyze, analyze_in, compute_accuracy, edit_distance, AnalysisResult};
pub use speech::{clean_text_for_speech, SpeechRecognizer, SpeechSynthesizer, Transcript};
pub use types::{speech_code_for, AccuracyTier, Language, PracticeSession, SessionSummary};
