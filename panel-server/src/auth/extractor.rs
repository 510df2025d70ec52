//! Session extractor
//!
//! Resolves the `auth_token` cookie against the session store. Used by
//! protected API handlers; page-route redirects are the guard's job.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::auth::{AUTH_COOKIE, Session};
use crate::core::{AppError, AppState};

/// The session of the requesting user
///
/// Rejects with 401 when the cookie is missing or no session is stored for
/// its token (e.g. the server restarted with a stale persisted file wiped).
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(AUTH_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or(AppError::Unauthorized)?;

        let session = state.sessions.get(&token).ok_or_else(|| {
            tracing::warn!("Cookie token has no stored session");
            AppError::Unauthorized
        })?;

        Ok(CurrentSession(session))
    }
}

impl CurrentSession {
    /// The session's bearer token
    pub fn token(&self) -> &str {
        &self.0.token
    }
}
