//! Action log page (`/panel/action-log`), read-only

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/panel/action-log", get(handler::page))
}
