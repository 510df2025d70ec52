//! Application state

use std::sync::Arc;

use mantis_client::{ClientConfig, HttpClient};

use crate::auth::SessionStore;
use crate::core::AppConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Unauthenticated client for the remote API; handlers clone it and
    /// attach the session's bearer token per call
    pub api: HttpClient,
    /// Session store (cookie token -> session)
    pub sessions: Arc<SessionStore>,
    /// Environment tag
    pub environment: String,
}

impl AppState {
    /// Initialize state: build the API client and restore persisted sessions
    pub fn new(config: &AppConfig) -> Result<Self, BoxError> {
        let api = ClientConfig::new(&config.api_base_url)
            .with_timeout(config.api_timeout)
            .build_http_client();

        let sessions = SessionStore::load(&config.session_file)?;
        if !sessions.is_empty() {
            tracing::info!(count = sessions.len(), "Restored persisted sessions");
        }

        Ok(Self {
            api,
            sessions: Arc::new(sessions),
            environment: config.environment.clone(),
        })
    }

    /// An API client authorized with the given bearer token
    pub fn api_with_token(&self, token: &str) -> HttpClient {
        self.api.clone().with_token(token)
    }
}
