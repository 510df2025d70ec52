//! Action log page handler

use std::collections::HashMap;

use axum::{Json, extract::State};
use serde_json::json;

use crate::auth::CurrentSession;
use crate::core::{AppResult, AppState};
use crate::ui::{Column, PageModel, TableModel};

fn columns() -> Vec<Column> {
    vec![
        Column::reference("user", "User"),
        Column::text("action", "Action"),
        Column::text("entity", "Entity"),
        Column::text("detail", "Detail"),
        Column::date("created_at", "When"),
    ]
}

/// GET /panel/action-log
pub async fn page(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);

    let (logs, users) = tokio::join!(api.list_action_logs(), api.list_users());
    let (logs, users) = (logs?, users?);

    let user_names: HashMap<i64, String> = users.iter().map(|u| (u.id, u.full_name())).collect();

    let rows = logs
        .iter()
        .map(|l| {
            json!({
                "id": l.id,
                "user": user_names.get(&l.user_id).cloned().unwrap_or_else(|| "-".to_string()),
                "action": l.action,
                "entity": l.entity,
                "detail": l.detail,
                "created_at": l.created_at,
            })
        })
        .collect();

    Ok(Json(PageModel::table_only(TableModel::new(
        "Action log",
        columns(),
        rows,
    ))))
}
