//! In-memory practice session log

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{PracticeSession, SessionSummary};

/// Session log shared across requests
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<Vec<PracticeSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Session Repository ===

    /// Append a scored session
    pub async fn insert(&self, session: PracticeSession) -> PracticeSession {
        self.sessions.write().await.push(session.clone());
        tracing::debug!("Stored pronunciation session {}", session.id);
        session
    }

    /// All sessions, newest first
    pub async fn list(&self) -> Vec<PracticeSession> {
        let mut sessions = self.sessions.read().await.clone();
        sessions.sort_by(|a, b| b.session_date.cmp(&a.session_date));
        sessions
    }

    /// Sessions recorded on the same UTC date as `now`, newest first
    pub async fn on_day_of(&self, now: DateTime<Utc>) -> Vec<PracticeSession> {
        let day = now.date_naive();
        self.list()
            .await
            .into_iter()
            .filter(|s| s.session_date.date_naive() == day)
            .collect()
    }

    pub async fn get(&self, id: Uuid) -> Option<PracticeSession> {
        self.sessions
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    pub async fn summary(&self) -> SessionSummary {
        SessionSummary::from_sessions(&self.sessions.read().await)
    }
}
