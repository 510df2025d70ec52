//! Route guard middleware
//!
//! Inspects the `auth_token` cookie per request and redirects:
//! unauthenticated requests away from `/panel`, authenticated requests away
//! from `/login`. Purely declarative - cookie presence only, no validation
//! against the backend; protected API handlers resolve the actual session
//! through [`CurrentSession`](crate::auth::CurrentSession).

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

/// Cookie carrying the bearer token, set on login and cleared on logout
pub const AUTH_COOKIE: &str = "auth_token";

/// Path prefixes that require a session cookie
const PROTECTED_PREFIXES: &[&str] = &["/panel"];

/// Auth pages a signed-in user is bounced away from
const AUTH_PAGES: &[&str] = &["/login"];

/// Guard outcome for a path/cookie pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToPanel,
}

/// Decide what the guard does for a request path
pub fn decide(path: &str, has_token: bool) -> GuardDecision {
    let protected = PROTECTED_PREFIXES
        .iter()
        .any(|p| path == *p || path.starts_with(&format!("{p}/")));
    if protected && !has_token {
        return GuardDecision::RedirectToLogin;
    }

    let auth_page = AUTH_PAGES.iter().any(|p| path == *p);
    if auth_page && has_token {
        return GuardDecision::RedirectToPanel;
    }

    GuardDecision::Allow
}

/// Route guard middleware
pub async fn route_guard(jar: CookieJar, req: Request, next: Next) -> Response {
    let has_token = jar.get(AUTH_COOKIE).is_some();

    match decide(req.uri().path(), has_token) {
        GuardDecision::Allow => next.run(req).await,
        GuardDecision::RedirectToLogin => {
            tracing::debug!(path = %req.uri().path(), "Unauthenticated, redirecting to login");
            Redirect::to("/login").into_response()
        }
        GuardDecision::RedirectToPanel => Redirect::to("/panel").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_paths_require_the_cookie() {
        assert_eq!(decide("/panel", false), GuardDecision::RedirectToLogin);
        assert_eq!(decide("/panel/users", false), GuardDecision::RedirectToLogin);
        assert_eq!(decide("/panel", true), GuardDecision::Allow);
        assert_eq!(decide("/panel/work-orders", true), GuardDecision::Allow);
    }

    #[test]
    fn login_page_bounces_signed_in_users() {
        assert_eq!(decide("/login", true), GuardDecision::RedirectToPanel);
        assert_eq!(decide("/login", false), GuardDecision::Allow);
    }

    #[test]
    fn public_paths_pass_through() {
        assert_eq!(decide("/health", false), GuardDecision::Allow);
        assert_eq!(decide("/maintenance", false), GuardDecision::Allow);
        assert_eq!(decide("/session", true), GuardDecision::Allow);
    }

    #[test]
    fn prefix_match_does_not_swallow_lookalikes() {
        // "/panelware" is not under "/panel"
        assert_eq!(decide("/panelware", false), GuardDecision::Allow);
    }
}
