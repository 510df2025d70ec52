//! Categories page handlers

use axum::{
    Json,
    extract::{Path, State},
};
use mantis_client::HttpClient;
use serde_json::json;

use shared::client::StatePayload;
use shared::models::{CategoryCreate, CategoryUpdate};

use crate::auth::CurrentSession;
use crate::core::{AppResult, AppState};
use crate::ui::{Column, Field, FormModel, PageModel, TableModel};

fn columns() -> Vec<Column> {
    vec![
        Column::text("name", "Name"),
        Column::text("description", "Description"),
        Column::date("created_at", "Created"),
        Column::badge("is_active", "State"),
    ]
}

fn form() -> FormModel {
    FormModel::new(
        "Category",
        vec![
            Field::text("name", "Name").required(),
            Field::textarea("description", "Description"),
        ],
    )
}

async fn page_model(api: &HttpClient) -> AppResult<PageModel> {
    let categories = api.list_categories().await?;
    let rows = categories
        .iter()
        .map(|c| {
            json!({
                "id": c.id,
                "name": c.name,
                "description": c.description,
                "created_at": c.created_at,
                "is_active": c.is_active,
            })
        })
        .collect();

    Ok(PageModel::new(
        TableModel::new("Categories", columns(), rows),
        form(),
    ))
}

/// GET /panel/categories
pub async fn page(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    Ok(Json(page_model(&api).await?))
}

/// POST /panel/categories - create, then return the refreshed page
pub async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.create_category(&payload).await?;
    Ok(Json(page_model(&api).await?))
}

/// PUT /panel/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.update_category(id, &payload).await?;
    Ok(Json(page_model(&api).await?))
}

/// PUT /panel/categories/{id}/state
pub async fn set_state(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<StatePayload>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.set_category_state(id, payload.is_active).await?;
    Ok(Json(page_model(&api).await?))
}
