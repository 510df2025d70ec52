//! Work orders page handlers
//!
//! A work order references a technician, an instructor and the maintenance
//! request it came from. All referenced lists are fetched concurrently and
//! joined by id for display; nothing is checked locally.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};
use mantis_client::HttpClient;
use serde_json::{Value, json};

use shared::client::StatePayload;
use shared::models::{
    MaintenanceRequest, User, WorkOrder, WorkOrderCreate, WorkOrderPriority, WorkOrderUpdate,
};

use crate::auth::CurrentSession;
use crate::core::{AppResult, AppState};
use crate::ui::{Column, Field, FormModel, PageModel, SelectOption, TableModel};

fn columns() -> Vec<Column> {
    vec![
        Column::text("code", "Code"),
        Column::text("description", "Description"),
        Column::badge("status", "Status"),
        Column::badge("priority", "Priority"),
        Column::reference("technician", "Technician"),
        Column::reference("instructor", "Instructor"),
        Column::reference("request", "Request"),
        Column::date("scheduled_for", "Scheduled"),
    ]
}

fn user_options(users: &[User]) -> Vec<SelectOption> {
    users
        .iter()
        .filter(|u| u.is_active)
        .map(|u| SelectOption::new(u.id.to_string(), u.full_name()))
        .collect()
}

fn form(
    technicians: &[User],
    instructors: &[User],
    requests: &[MaintenanceRequest],
) -> FormModel {
    let priorities = [
        WorkOrderPriority::Low,
        WorkOrderPriority::Medium,
        WorkOrderPriority::High,
    ]
    .iter()
    .map(|p| SelectOption::new(p.code(), p.label()))
    .collect();

    let request_options = requests
        .iter()
        .map(|r| SelectOption::new(r.id.to_string(), request_label(r)))
        .collect();

    FormModel::new(
        "Work order",
        vec![
            Field::textarea("description", "Description").required(),
            Field::select("priority", "Priority", priorities).required(),
            Field::select("technician_id", "Technician", user_options(technicians)),
            Field::select("instructor_id", "Instructor", user_options(instructors)),
            Field::select("request_id", "Request", request_options),
            Field::date("scheduled_for", "Scheduled for"),
        ],
    )
}

/// Display label for a joined maintenance request
fn request_label(request: &MaintenanceRequest) -> String {
    format!("#{} - {}", request.id, request.location)
}

/// Join referenced names into display rows
fn rows(
    orders: &[WorkOrder],
    users: &[User],
    requests: &[MaintenanceRequest],
) -> Vec<Value> {
    let user_names: HashMap<i64, String> =
        users.iter().map(|u| (u.id, u.full_name())).collect();
    let request_labels: HashMap<i64, String> =
        requests.iter().map(|r| (r.id, request_label(r))).collect();

    let joined = |map: &HashMap<i64, String>, id: Option<i64>| {
        id.and_then(|id| map.get(&id).cloned())
            .unwrap_or_else(|| "-".to_string())
    };

    orders
        .iter()
        .map(|o| {
            json!({
                "id": o.id,
                "code": o.code,
                "description": o.description,
                "status": o.status.label(),
                "priority": o.priority.label(),
                "technician": joined(&user_names, o.technician_id),
                "instructor": joined(&user_names, o.instructor_id),
                "request": joined(&request_labels, o.request_id),
                "scheduled_for": o.scheduled_for,
                "is_active": o.is_active,
            })
        })
        .collect()
}

async fn page_model(api: &HttpClient) -> AppResult<PageModel> {
    let (orders, users, requests, technicians, instructors) = tokio::join!(
        api.list_work_orders(),
        api.list_users(),
        api.list_maintenance_requests(),
        api.list_users_by_role("technician"),
        api.list_users_by_role("instructor"),
    );
    let (orders, users, requests) = (orders?, users?, requests?);
    let (technicians, instructors) = (technicians?, instructors?);

    Ok(PageModel::new(
        TableModel::new("Work orders", columns(), rows(&orders, &users, &requests)),
        form(&technicians, &instructors, &requests),
    ))
}

/// GET /panel/work-orders
pub async fn page(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    Ok(Json(page_model(&api).await?))
}

/// POST /panel/work-orders - create, then return the refreshed page
pub async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<WorkOrderCreate>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.create_work_order(&payload).await?;
    Ok(Json(page_model(&api).await?))
}

/// PUT /panel/work-orders/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<WorkOrderUpdate>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.update_work_order(id, &payload).await?;
    Ok(Json(page_model(&api).await?))
}

/// PUT /panel/work-orders/{id}/state
pub async fn set_state(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<StatePayload>,
) -> AppResult<Json<PageModel>> {
    let api = state.api_with_token(&session.token);
    api.set_work_order_state(id, payload.is_active).await?;
    Ok(Json(page_model(&api).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{RequestStatus, WorkOrderStatus};

    fn sample_user(id: i64, first: &str, last: &str) -> User {
        User {
            id,
            document: "123".into(),
            document_type: "CC".into(),
            first_name: first.into(),
            last_name: last.into(),
            email: "t@example.edu".into(),
            phone: None,
            role_id: 1,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_request(id: i64, location: &str) -> MaintenanceRequest {
        MaintenanceRequest {
            id,
            requester_name: "Ana".into(),
            document: "456".into(),
            email: "ana@example.edu".into(),
            phone: None,
            location: location.into(),
            category_id: None,
            description: "broken".into(),
            status: RequestStatus::Received,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_order(technician_id: Option<i64>, request_id: Option<i64>) -> WorkOrder {
        WorkOrder {
            id: 1,
            code: "WO-001".into(),
            description: "fix it".into(),
            status: WorkOrderStatus::Pending,
            priority: WorkOrderPriority::High,
            technician_id,
            instructor_id: None,
            request_id,
            scheduled_for: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn rows_join_referenced_names() {
        let users = vec![sample_user(7, "Luis", "Mora")];
        let requests = vec![sample_request(3, "Lab 2")];
        let orders = vec![sample_order(Some(7), Some(3))];

        let rows = rows(&orders, &users, &requests);
        assert_eq!(rows[0]["technician"], "Luis Mora");
        assert_eq!(rows[0]["request"], "#3 - Lab 2");
        assert_eq!(rows[0]["status"], "Pending");
    }

    #[test]
    fn unresolved_references_render_as_dash() {
        let orders = vec![sample_order(Some(99), None)];
        let rows = rows(&orders, &[], &[]);
        assert_eq!(rows[0]["technician"], "-");
        assert_eq!(rows[0]["instructor"], "-");
        assert_eq!(rows[0]["request"], "-");
    }
}
