//! Pronunciation scoring endpoint

use axum::{extract::State, Json};
use pronunciation_core::analyze_in;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/pronunciation/analyze
/// Scores a recognized transcript against the target word without storing it
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    let locale = parse_locale(payload.locale.as_deref(), state.config.feedback_locale)?;

    let analysis = analyze_in(&payload.target_word, &payload.recognized_word, locale);
    let tier = AccuracyTier::from_accuracy(analysis.accuracy);

    tracing::debug!(
        "Analyzed '{}' against '{}': {}",
        analysis.recognized_word,
        analysis.target_word,
        analysis.accuracy
    );

    Ok(Json(AnalyzeResponse { analysis, tier }))
}
