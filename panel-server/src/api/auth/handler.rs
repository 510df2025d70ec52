//! Authentication handlers
//!
//! The panel does no credential checking of its own: login forwards to the
//! remote API and, on success, stores the returned token/menu/role and sets
//! the `auth_token` cookie the route guard reads. Failures surface the
//! remote error message unchanged.

use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Utc;
use serde::Serialize;

use shared::client::{LoginRequest, LoginResponse, MenuModule, RegisterRequest};
use shared::models::User;

use crate::auth::{AUTH_COOKIE, Session};
use crate::core::{AppError, AppResult, AppState};

fn auth_cookie(token: String) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    if req.document.trim().is_empty()
        || req.document_type.trim().is_empty()
        || req.password.is_empty()
    {
        return Err(AppError::Validation(
            "Document, document type and password are required".to_string(),
        ));
    }

    let response = state.api.login(&req).await?;

    let session = Session {
        token: response.token.clone(),
        menu: response.menu.clone(),
        role: response.role.clone(),
        logged_in_at: Utc::now(),
    };
    state
        .sessions
        .insert(session)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(role = %response.role, "User logged in");

    Ok((jar.add(auth_cookie(response.token.clone())), Json(response)))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<()>)> {
    if let Some(cookie) = jar.get(AUTH_COOKIE) {
        let token = cookie.value().to_string();
        state
            .sessions
            .remove(&token)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        tracing::info!("User logged out");
    }

    let jar = jar.remove(Cookie::build(AUTH_COOKIE).path("/").build());
    Ok((jar, Json(())))
}

/// POST /auth/register
///
/// Presence checks only; everything else is the remote API's job.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<User>> {
    let missing = req.document.trim().is_empty()
        || req.first_name.trim().is_empty()
        || req.last_name.trim().is_empty()
        || req.email.trim().is_empty()
        || req.password.is_empty();
    if missing {
        return Err(AppError::Validation(
            "All registration fields are required".to_string(),
        ));
    }

    let user = state.api.register(&req).await?;
    tracing::info!(user_id = user.id, "User registered");
    Ok(Json(user))
}

/// Session state for the shell to restore on page load
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub menu: Vec<MenuModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// GET /session
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Json<SessionInfo> {
    let session = jar
        .get(AUTH_COOKIE)
        .and_then(|c| state.sessions.get(c.value()));

    Json(match session {
        Some(s) => SessionInfo {
            authenticated: true,
            menu: s.menu,
            role: Some(s.role),
        },
        None => SessionInfo {
            authenticated: false,
            menu: Vec::new(),
            role: None,
        },
    })
}
