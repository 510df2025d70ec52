//! Panel server configuration

use std::path::PathBuf;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Panel server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP bind port
    pub port: u16,
    /// Remote maintenance API base URL
    pub api_base_url: String,
    /// Upstream request timeout in seconds
    pub api_timeout: u64,
    /// Path of the persisted session file
    pub session_file: PathBuf,
    /// Environment: development | staging | production
    pub environment: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            api_base_url: std::env::var("API_BASE_URL")
                .map_err(|_| "API_BASE_URL must be set")?,
            api_timeout: std::env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            session_file: std::env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/sessions.json")),
            environment,
        })
    }
}
