//! Maintenance requests
//!
//! Two faces: the public landing endpoints (submission form + submit, no
//! auth) and the admin requests page under `/panel/requests`.

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::AppState;

/// Public landing routes - no authentication
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/maintenance/form", get(handler::landing_form))
        .route("/maintenance", post(handler::submit))
}

/// Admin requests page - behind the route guard
pub fn panel_router() -> Router<AppState> {
    Router::new()
        .route("/panel/requests", get(handler::page))
        .route("/panel/requests/{id}/status", put(handler::set_status))
}
