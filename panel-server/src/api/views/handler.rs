//! Views page handlers
//!
//! Views reference their module; the page fetches both lists concurrently
//! and joins the module name into each row for display.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};
use mantis_client::HttpClient;
use serde_json::json;

use shared::client::StatePayload;
use shared::models::{Module, ViewCreate, ViewUpdate};

use crate::auth::CurrentSession;
use crate::core::{AppResult, AppState};
use crate::ui::{Column, Field, FormModel, PageModel, SelectOption, TableModel};

fn columns() -> Vec<Column> {
    vec![
        Column::text("name", "Name"),
        Column::text("route", "Route"),
        Column::reference("module", "Module"),
        Column::badge("is_active", "State"),
    ]
}

fn form(modules: &[Module]) -> FormModel {
    let options = modules
        .iter()
        .filter(|m| m.is_active)
        .map(|m| SelectOption::new(m.id.to_string(), m.name.clone()))
        .collect();

    FormModel::new(
        "View",
        vec![
            Field::text("name", "Name").required(),
            Field::text("route", "Route").required(),
            Field::text("icon", "Icon"),
            Field::select("module_id", "Module", options).required(),
        ],
    )
}

async fn page_model(api: &HttpClient) -> AppResult<PageModel> {
    let (views, modules) = tokio::join!(api.list_views(), api.list_modules());
    let (views, modules) = (views?, modules?);

    let module_names: HashMap<i64, &str> =
        modules.iter().map(|m| (m.id, m.name.as_str())).collect();

    let rows = views
        .iter()
        .map(|v| {
            json!({
                "id": v.id,
                "name": v.name,
                "route": v.route,
                "module": module_names.get(&v.module_id).copied().unwrap_or("-"),
                "is_active": v.is_active,
            })
        })
        .collect();

    Ok(PageModel::new(
        TableModel::new("Views", columns(), rows),
        form(&modules),
    ))
}

/// GET /panel/views
pub async fn page(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    Ok(Json(page_model(&api).await?))
}

/// POST /panel/views - create, then return the refreshed page
pub async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<ViewCreate>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.create_view(&payload).await?;
    Ok(Json(page_model(&api).await?))
}

/// PUT /panel/views/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<ViewUpdate>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.update_view(id, &payload).await?;
    Ok(Json(page_model(&api).await?))
}

/// PUT /panel/views/{id}/state
pub async fn set_state(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<StatePayload>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.set_view_state(id, payload.is_active).await?;
    Ok(Json(page_model(&api).await?))
}

/// DELETE /panel/views/{id}
pub async fn delete(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.delete_view(id).await?;
    Ok(Json(page_model(&api).await?))
}
