//! HTTP routes and handlers
//!
//! Entity pages live under `/panel/*` behind the route guard; auth, session
//! read-back, health and the public maintenance landing are open.

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::route_guard;
use crate::core::AppState;

pub mod action_log;
pub mod auth;
pub mod categories;
pub mod health;
pub mod home;
pub mod maintenance;
pub mod modules;
pub mod roles;
pub mod system_config;
pub mod users;
pub mod views;
pub mod work_orders;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        // Public routes
        .merge(health::router())
        .merge(auth::router())
        .merge(maintenance::public_router())
        // Panel routes - gated by the route guard
        .merge(home::router())
        .merge(modules::router())
        .merge(views::router())
        .merge(roles::router())
        .merge(users::router())
        .merge(categories::router())
        .merge(work_orders::router())
        .merge(action_log::router())
        .merge(system_config::router())
        .merge(maintenance::panel_router())
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: AppState) -> Router {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests from the shell dev server
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // ========== Application Middleware ==========
        // Route guard - cookie check and login/panel redirects, runs first
        .layer(axum_middleware::from_fn(route_guard))
        .with_state(state)
}
