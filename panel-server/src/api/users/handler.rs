//! Users page handlers
//!
//! Role names are resolved client-side for display; the form offers the
//! active roles and the document type codes the remote API accepts.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};
use mantis_client::HttpClient;
use serde_json::json;

use shared::client::StatePayload;
use shared::models::{Role, UserCreate, UserUpdate};

use crate::auth::CurrentSession;
use crate::core::{AppResult, AppState};
use crate::ui::{Column, Field, FormModel, PageModel, SelectOption, TableModel};

/// Document type codes accepted by the remote API
const DOCUMENT_TYPES: &[(&str, &str)] = &[
    ("CC", "Citizen ID"),
    ("TI", "Identity card"),
    ("CE", "Foreigner ID"),
];

fn columns() -> Vec<Column> {
    vec![
        Column::text("document", "Document"),
        Column::text("name", "Name"),
        Column::text("email", "Email"),
        Column::reference("role", "Role"),
        Column::badge("is_active", "State"),
    ]
}

fn form(roles: &[Role]) -> FormModel {
    let document_types = DOCUMENT_TYPES
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect();
    let role_options = roles
        .iter()
        .filter(|r| r.is_active)
        .map(|r| SelectOption::new(r.id.to_string(), r.name.clone()))
        .collect();

    FormModel::new(
        "User",
        vec![
            Field::select("document_type", "Document type", document_types).required(),
            Field::text("document", "Document").required(),
            Field::text("first_name", "First name").required(),
            Field::text("last_name", "Last name").required(),
            Field::email("email", "Email").required(),
            Field::text("phone", "Phone"),
            Field::password("password", "Password").required(),
            Field::select("role_id", "Role", role_options).required(),
        ],
    )
}

async fn page_model(api: &HttpClient) -> AppResult<PageModel> {
    let (users, roles) = tokio::join!(api.list_users(), api.list_roles());
    let (users, roles) = (users?, roles?);

    let role_names: HashMap<i64, &str> = roles.iter().map(|r| (r.id, r.name.as_str())).collect();

    let rows = users
        .iter()
        .map(|u| {
            json!({
                "id": u.id,
                "document": u.document,
                "name": u.full_name(),
                "email": u.email,
                "role": role_names.get(&u.role_id).copied().unwrap_or("-"),
                "is_active": u.is_active,
            })
        })
        .collect();

    Ok(PageModel::new(
        TableModel::new("Users", columns(), rows),
        form(&roles),
    ))
}

/// GET /panel/users
pub async fn page(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    Ok(Json(page_model(&api).await?))
}

/// POST /panel/users - create, then return the refreshed page
pub async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.create_user(&payload).await?;
    Ok(Json(page_model(&api).await?))
}

/// PUT /panel/users/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.update_user(id, &payload).await?;
    Ok(Json(page_model(&api).await?))
}

/// PUT /panel/users/{id}/state
pub async fn set_state(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<StatePayload>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.set_user_state(id, payload.is_active).await?;
    Ok(Json(page_model(&api).await?))
}
