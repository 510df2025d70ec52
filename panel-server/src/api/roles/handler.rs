//! Roles page handlers
//!
//! A role is a named permission set referencing view ids; the page resolves
//! those ids to view names for the table and offers active views as the
//! form's options.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};
use mantis_client::HttpClient;
use serde_json::json;

use shared::client::StatePayload;
use shared::models::{RoleCreate, RoleUpdate, View};

use crate::auth::CurrentSession;
use crate::core::{AppResult, AppState};
use crate::ui::{Column, Field, FormModel, PageModel, SelectOption, TableModel};

fn columns() -> Vec<Column> {
    vec![
        Column::text("name", "Name"),
        Column::text("description", "Description"),
        Column::reference("views", "Views"),
        Column::badge("is_active", "State"),
    ]
}

fn form(views: &[View]) -> FormModel {
    let options = views
        .iter()
        .filter(|v| v.is_active)
        .map(|v| SelectOption::new(v.id.to_string(), v.name.clone()))
        .collect();

    FormModel::new(
        "Role",
        vec![
            Field::text("name", "Name").required(),
            Field::textarea("description", "Description"),
            Field::select("view_ids", "Views", options).required(),
        ],
    )
}

async fn page_model(api: &HttpClient) -> AppResult<PageModel> {
    let (roles, views) = tokio::join!(api.list_roles(), api.list_views());
    let (roles, views) = (roles?, views?);

    let view_names: HashMap<i64, &str> = views.iter().map(|v| (v.id, v.name.as_str())).collect();

    let rows = roles
        .iter()
        .map(|r| {
            let names: Vec<&str> = r
                .view_ids
                .iter()
                .filter_map(|id| view_names.get(id).copied())
                .collect();
            json!({
                "id": r.id,
                "name": r.name,
                "description": r.description,
                "views": names.join(", "),
                "is_active": r.is_active,
            })
        })
        .collect();

    Ok(PageModel::new(
        TableModel::new("Roles", columns(), rows),
        form(&views),
    ))
}

/// GET /panel/roles
pub async fn page(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    Ok(Json(page_model(&api).await?))
}

/// POST /panel/roles - create, then return the refreshed page
pub async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<RoleCreate>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.create_role(&payload).await?;
    Ok(Json(page_model(&api).await?))
}

/// PUT /panel/roles/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<RoleUpdate>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.update_role(id, &payload).await?;
    Ok(Json(page_model(&api).await?))
}

/// PUT /panel/roles/{id}/state
pub async fn set_state(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<StatePayload>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.set_role_state(id, payload.is_active).await?;
    Ok(Json(page_model(&api).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_form_only_offers_active_views() {
        let views = vec![
            View {
                id: 1,
                name: "Users".into(),
                route: "/panel/users".into(),
                icon: None,
                module_id: 1,
                is_active: true,
            },
            View {
                id: 2,
                name: "Legacy".into(),
                route: "/panel/legacy".into(),
                icon: None,
                module_id: 1,
                is_active: false,
            },
        ];

        let form = form(&views);
        let field = form.fields.iter().find(|f| f.name == "view_ids").unwrap();
        assert_eq!(field.options.len(), 1);
        assert_eq!(field.options[0].label, "Users");
    }
}
