//! Users page (`/panel/users`)

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/panel/users", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::page).post(handler::create))
        .route("/{id}", put(handler::update))
        .route("/{id}/state", put(handler::set_state))
}
