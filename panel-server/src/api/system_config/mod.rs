//! System config page (`/panel/config`)

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/panel/config",
        get(handler::page).put(handler::update),
    )
}
