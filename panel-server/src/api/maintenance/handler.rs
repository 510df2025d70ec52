//! Maintenance request handlers

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};
use mantis_client::HttpClient;
use serde::Deserialize;
use serde_json::json;

use shared::models::{Category, MaintenanceRequest, MaintenanceRequestCreate, RequestStatus};

use crate::auth::CurrentSession;
use crate::core::{AppError, AppResult, AppState};
use crate::ui::{Column, Field, FormModel, PageModel, SelectOption, TableModel};

fn landing_fields(categories: &[Category]) -> FormModel {
    let options = categories
        .iter()
        .filter(|c| c.is_active)
        .map(|c| SelectOption::new(c.id.to_string(), c.name.clone()))
        .collect();

    FormModel::new(
        "Report a maintenance issue",
        vec![
            Field::text("requester_name", "Your name").required(),
            Field::text("document", "Document").required(),
            Field::email("email", "Email").required(),
            Field::text("phone", "Phone"),
            Field::text("location", "Location").required(),
            Field::select("category_id", "Category", options),
            Field::textarea("description", "What happened?").required(),
        ],
    )
}

/// GET /maintenance/form - public landing form
pub async fn landing_form(State(state): State<AppState>) -> AppResult<Json<FormModel>> {
    let categories = state.api.list_categories().await?;
    Ok(Json(landing_fields(&categories)))
}

/// POST /maintenance - public submission, presence checks only
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<MaintenanceRequestCreate>,
) -> AppResult<Json<MaintenanceRequest>> {
    let missing = payload.requester_name.trim().is_empty()
        || payload.document.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.location.trim().is_empty()
        || payload.description.trim().is_empty();
    if missing {
        return Err(AppError::Validation(
            "Name, document, email, location and description are required".to_string(),
        ));
    }

    let request = state.api.submit_maintenance_request(&payload).await?;
    tracing::info!(request_id = request.id, "Maintenance request submitted");
    Ok(Json(request))
}

// ========== Admin requests page ==========

fn columns() -> Vec<Column> {
    vec![
        Column::text("requester_name", "Requester"),
        Column::text("location", "Location"),
        Column::reference("category", "Category"),
        Column::text("description", "Description"),
        Column::badge("status", "Status"),
        Column::date("created_at", "Received"),
    ]
}

async fn page_model(api: &HttpClient) -> AppResult<PageModel> {
    let (requests, categories) = tokio::join!(api.list_maintenance_requests(), api.list_categories());
    let (requests, categories) = (requests?, categories?);

    let category_names: HashMap<i64, &str> =
        categories.iter().map(|c| (c.id, c.name.as_str())).collect();

    let rows = requests
        .iter()
        .map(|r| {
            json!({
                "id": r.id,
                "requester_name": r.requester_name,
                "location": r.location,
                "category": r.category_id
                    .and_then(|id| category_names.get(&id).copied())
                    .unwrap_or("-"),
                "description": r.description,
                "status": r.status.label(),
                "created_at": r.created_at,
            })
        })
        .collect();

    Ok(PageModel::table_only(TableModel::new(
        "Maintenance requests",
        columns(),
        rows,
    )))
}

/// GET /panel/requests
pub async fn page(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    Ok(Json(page_model(&api).await?))
}

#[derive(Debug, Deserialize)]
pub struct SetStatusPayload {
    pub status: RequestStatus,
}

/// PUT /panel/requests/{id}/status - update, then return the refreshed page
pub async fn set_status(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<SetStatusPayload>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.set_maintenance_request_status(id, payload.status).await?;
    Ok(Json(page_model(&api).await?))
}
