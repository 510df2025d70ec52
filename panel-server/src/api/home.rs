//! Panel home - the screen the guard redirects signed-in users to

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use shared::client::MenuModule;

use crate::auth::CurrentSession;
use crate::core::{AppResult, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/panel", get(home))
}

/// Panel home payload: the sidebar menu plus the configured site name
#[derive(Debug, Serialize)]
pub struct PanelHome {
    pub site_name: String,
    pub role: String,
    pub menu: Vec<MenuModule>,
}

async fn home(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<PanelHome>> {
    let config = state.api_with_token(&session.token).get_config().await?;

    Ok(Json(PanelHome {
        site_name: config.site_name,
        role: session.role,
        menu: session.menu,
    }))
}
