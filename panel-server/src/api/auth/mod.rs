//! Auth API module - login, logout, registration, session read-back

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handler::login))
        .route("/auth/logout", post(handler::logout))
        .route("/auth/register", post(handler::register))
        .route("/session", get(handler::session))
}
