//! panel-server - serving tier for the maintenance admin panel
//!
//! Long-running service that:
//! - Proxies the remote maintenance API behind typed page endpoints
//! - Owns the browser session (auth_token cookie + persisted token/menu/role)
//! - Gates /panel routes with a cookie-only route guard
//! - Serves the public maintenance-request landing endpoints

use panel_server::api;
use panel_server::core::{AppConfig, AppState};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "panel_server=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!("Starting panel-server (env: {})", config.environment);

    // Initialize application state (restores persisted sessions)
    let state = AppState::new(&config)?;

    let app = api::build_app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("panel-server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
