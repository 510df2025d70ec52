//! Views page (`/panel/views`)

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/panel/views", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::page).post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .route("/{id}/state", put(handler::set_state))
}
