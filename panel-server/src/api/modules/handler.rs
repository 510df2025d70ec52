//! Modules page handlers

use axum::{
    Json,
    extract::{Path, State},
};
use mantis_client::HttpClient;
use serde_json::json;

use shared::client::StatePayload;
use shared::models::{ModuleCreate, ModuleUpdate};

use crate::auth::CurrentSession;
use crate::core::{AppResult, AppState};
use crate::ui::{Column, Field, FormModel, PageModel, TableModel};

fn columns() -> Vec<Column> {
    vec![
        Column::text("name", "Name"),
        Column::text("icon", "Icon"),
        Column::text("sort_order", "Order"),
        Column::badge("is_active", "State"),
    ]
}

fn form() -> FormModel {
    FormModel::new(
        "Module",
        vec![
            Field::text("name", "Name").required(),
            Field::text("icon", "Icon"),
            Field::text("sort_order", "Order"),
        ],
    )
}

async fn page_model(api: &HttpClient) -> AppResult<PageModel> {
    let modules = api.list_modules().await?;
    let rows = modules
        .iter()
        .map(|m| {
            json!({
                "id": m.id,
                "name": m.name,
                "icon": m.icon,
                "sort_order": m.sort_order,
                "is_active": m.is_active,
            })
        })
        .collect();

    Ok(PageModel::new(
        TableModel::new("Modules", columns(), rows),
        form(),
    ))
}

/// GET /panel/modules
pub async fn page(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    Ok(Json(page_model(&api).await?))
}

/// POST /panel/modules - create, then return the refreshed page
pub async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<ModuleCreate>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.create_module(&payload).await?;
    Ok(Json(page_model(&api).await?))
}

/// PUT /panel/modules/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<ModuleUpdate>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.update_module(id, &payload).await?;
    Ok(Json(page_model(&api).await?))
}

/// PUT /panel/modules/{id}/state
pub async fn set_state(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<StatePayload>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.set_module_state(id, payload.is_active).await?;
    Ok(Json(page_model(&api).await?))
}

/// DELETE /panel/modules/{id}
pub async fn delete(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.delete_module(id).await?;
    Ok(Json(page_model(&api).await?))
}
