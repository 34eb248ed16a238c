//! Common test utilities and fixtures for integration tests.
//!
//! Each TestContext owns a fresh in-memory session store, so tests do not
//! see each other's sessions.

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use pronunciation_backend::config::ServerConfig;
use pronunciation_backend::models::FeedbackLocale;
use pronunciation_backend::{router, AppState};

/// Test context holding the application state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a context with default configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a context whose feedback defaults to `locale`.
    pub fn with_locale(locale: FeedbackLocale) -> Self {
        Self::with_config(ServerConfig {
            feedback_locale: locale,
            ..ServerConfig::default()
        })
    }

    pub fn with_config(config: ServerConfig) -> Self {
        let state = AppState::new(config);
        let app = router(state.clone());
        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
