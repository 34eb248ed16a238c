//! Core types for pronunciation practice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::feedback::{EXCELLENT_THRESHOLD, GOOD_THRESHOLD};
use crate::scoring::AnalysisResult;

/// Speech locale used when a language code is not recognized.
pub const DEFAULT_SPEECH_CODE: &str = "en-US";

/// Practice language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    En,
    Ja,
    Ko,
    Fr,
    Zh,
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

impl Language {
    /// Get the language code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Fr => "fr",
            Self::Zh => "zh",
        }
    }

    /// Parse from a language code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "ja" => Some(Self::Ja),
            "ko" => Some(Self::Ko),
            "fr" => Some(Self::Fr),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// Locale code handed to speech recognition and synthesis.
    pub fn speech_code(&self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Ja => "ja-JP",
            Self::Ko => "ko-KR",
            Self::Fr => "fr-FR",
            Self::Zh => "zh-CN",
        }
    }
}

/// Speech locale for a raw language code, falling back to `en-US`.
pub fn speech_code_for(code: &str) -> &'static str {
    Language::from_code(code)
        .map(|language| language.speech_code())
        .unwrap_or(DEFAULT_SPEECH_CODE)
}

/// Three-band grouping of accuracy for display (green / yellow / red).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyTier {
    High,
    Medium,
    Low,
}

impl AccuracyTier {
    pub fn from_accuracy(accuracy: u8) -> Self {
        if accuracy >= EXCELLENT_THRESHOLD {
            Self::High
        } else if accuracy >= GOOD_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Display color name.
    pub fn color(&self) -> &'static str {
        match self {
            Self::High => "green",
            Self::Medium => "yellow",
            Self::Low => "red",
        }
    }
}

/// One scored pronunciation attempt, as handed to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeSession {
    pub id: Uuid,
    pub vocabulary_id: String,
    pub target_word: String,
    pub recognized_word: String,
    pub accuracy: u8,
    pub feedback: String,
    pub language: Language,
    pub session_date: DateTime<Utc>,
}

impl PracticeSession {
    /// Build a session record from an analysis, stamped now.
    pub fn from_analysis(
        vocabulary_id: impl Into<String>,
        language: Language,
        analysis: AnalysisResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            vocabulary_id: vocabulary_id.into(),
            target_word: analysis.target_word,
            recognized_word: analysis.recognized_word,
            accuracy: analysis.accuracy,
            feedback: analysis.feedback,
            language,
            session_date: Utc::now(),
        }
    }

    pub fn tier(&self) -> AccuracyTier {
        AccuracyTier::from_accuracy(self.accuracy)
    }
}

/// Aggregate over a set of practice sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub attempts: usize,
    /// Rounded mean accuracy, 0 when there are no attempts.
    pub average_accuracy: u8,
    pub best_accuracy: u8,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SessionSummary {
    pub fn from_sessions(sessions: &[PracticeSession]) -> Self {
        if sessions.is_empty() {
            return Self::default();
        }

        let mut summary = Self {
            attempts: sessions.len(),
            ..Self::default()
        };
        let mut total: usize = 0;

        for session in sessions {
            total += session.accuracy as usize;
            summary.best_accuracy = summary.best_accuracy.max(session.accuracy);
            match session.tier() {
                AccuracyTier::High => summary.high += 1,
                AccuracyTier::Medium => summary.medium += 1,
                AccuracyTier::Low => summary.low += 1,
            }
        }

        let n = sessions.len();
        summary.average_accuracy = ((total * 2 + n) / (2 * n)) as u8;
        summary
    }
}
