//! Pronunciation session endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use pronunciation_core::analyze_in;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/pronunciation-sessions
pub async fn list(State(state): State<AppState>) -> Json<Vec<PracticeSession>> {
    Json(state.sessions.list().await)
}

/// GET /api/pronunciation-sessions/today
pub async fn today(State(state): State<AppState>) -> Json<Vec<PracticeSession>> {
    Json(state.sessions.on_day_of(Utc::now()).await)
}

/// GET /api/pronunciation-sessions/summary
pub async fn summary(State(state): State<AppState>) -> Json<SessionSummary> {
    Json(state.sessions.summary().await)
}

/// GET /api/pronunciation-sessions/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PracticeSession>> {
    state
        .sessions
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Session {}", id)))
}

/// POST /api/pronunciation-sessions
/// Scores the attempt server-side and records it
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<PracticeSession>)> {
    let language = payload.validate()?;
    let locale = parse_locale(payload.locale.as_deref(), state.config.feedback_locale)?;

    let analysis = analyze_in(&payload.target_word, &payload.recognized_word, locale);
    let session = PracticeSession::from_analysis(payload.vocabulary_id, language, analysis);
    let session = state.sessions.insert(session).await;

    tracing::info!(
        "Recorded pronunciation session {} for vocabulary {} ({}%)",
        session.id,
        session.vocabulary_id,
        session.accuracy
    );

    Ok((StatusCode::CREATED, Json(session)))
}
