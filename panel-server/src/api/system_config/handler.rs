//! System config page handlers
//!
//! A single form over the remote singleton; the current record rides along
//! so the shell can pre-fill the fields.

use axum::{Json, extract::State};
use serde::Serialize;

use shared::models::{SystemConfig, SystemConfigUpdate};

use crate::auth::CurrentSession;
use crate::core::{AppResult, AppState};
use crate::ui::{Field, FormModel};

fn form() -> FormModel {
    FormModel::new(
        "System configuration",
        vec![
            Field::text("site_name", "Site name").required(),
            Field::email("contact_email", "Contact email").required(),
            Field::text("intake_enabled", "Accept new requests"),
            Field::textarea("session_notice", "Login notice"),
        ],
    )
}

/// Config page payload: the form plus the current values
#[derive(Debug, Serialize)]
pub struct ConfigPage {
    pub config: SystemConfig,
    pub form: FormModel,
}

/// GET /panel/config
pub async fn page(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<ConfigPage>> {
    let config = state.api_with_token(&session.token).get_config().await?;
    Ok(Json(ConfigPage {
        config,
        form: form(),
    }))
}

/// PUT /panel/config - update, then return the refreshed record
pub async fn update(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<SystemConfigUpdate>,
) -> AppResult<Json<ConfigPage>> {
    let api = state.api_with_token(&session.token);
    api.update_config(&payload).await?;
    let config = api.get_config().await?;
    Ok(Json(ConfigPage {
        config,
        form: form(),
    }))
}
