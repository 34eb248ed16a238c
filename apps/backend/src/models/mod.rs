//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from pronunciation-core
pub use pronunciation_core::{
    AccuracyTier, AnalysisResult, FeedbackLocale, Language, PracticeSession, SessionSummary,
};

use crate::error::{ApiError, Result};

// === Analyze Types ===

#[derive(Debug, Deserialize, Serialize)]
pub struct AnalyzeRequest {
    pub target_word: String,
    pub recognized_word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub tier: AccuracyTier,
}

// === Session Types ===

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateSessionRequest {
    pub vocabulary_id: String,
    pub target_word: String,
    pub recognized_word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl CreateSessionRequest {
    /// Reject blank ids/targets and unknown language codes
    pub fn validate(&self) -> Result<Language> {
        if self.vocabulary_id.trim().is_empty() {
            return Err(ApiError::BadRequest("vocabulary_id is required".to_string()));
        }
        if self.target_word.trim().is_empty() {
            return Err(ApiError::BadRequest("target_word is required".to_string()));
        }
        parse_language(self.language.as_deref())
    }
}

/// Resolve an optional language code, defaulting to English
pub fn parse_language(code: Option<&str>) -> Result<Language> {
    match code {
        Some(code) => Language::from_code(code)
            .ok_or_else(|| ApiError::BadRequest(format!("unknown language: {}", code))),
        None => Ok(Language::default()),
    }
}

/// Resolve an optional locale code, falling back to the configured one
pub fn parse_locale(code: Option<&str>, fallback: FeedbackLocale) -> Result<FeedbackLocale> {
    match code {
        Some(code) => FeedbackLocale::from_code(code)
            .ok_or_else(|| ApiError::BadRequest(format!("unknown locale: {}", code))),
        None => Ok(fallback),
    }
}
