//! Route guard and session integration tests
//!
//! Drives the fully assembled router as a tower Service. No remote API is
//! reached: the guard and session endpoints decide before any upstream call.

use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use chrono::Utc;
use panel_server::api;
use panel_server::auth::Session;
use panel_server::core::{AppConfig, AppState};

fn test_state(dir: &tempfile::TempDir) -> AppState {
    let config = AppConfig {
        port: 0,
        api_base_url: "http://localhost:9".to_string(),
        api_timeout: 1,
        session_file: dir.path().join("sessions.json"),
        environment: "test".to_string(),
    };
    AppState::new(&config).expect("state")
}

fn signed_in(state: &AppState, token: &str) {
    state
        .sessions
        .insert(Session {
            token: token.to_string(),
            menu: vec![],
            role: "admin".to_string(),
            logged_in_at: Utc::now(),
        })
        .expect("insert session");
}

async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn unauthenticated_panel_request_redirects_to_login() {
    let dir = tempfile::tempdir().unwrap();
    let app = api::build_app(test_state(&dir));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/panel/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn authenticated_login_page_redirects_to_panel() {
    let dir = tempfile::tempdir().unwrap();
    let app = api::build_app(test_state(&dir));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/login")
                .header(header::COOKIE, "auth_token=tok-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/panel");
}

#[tokio::test]
async fn health_is_public() {
    let dir = tempfile::tempdir().unwrap();
    let app = api::build_app(test_state(&dir));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn session_readback_reports_unauthenticated_without_cookie() {
    let dir = tempfile::tempdir().unwrap();
    let app = api::build_app(test_state(&dir));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/session")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["authenticated"], false);
}

#[tokio::test]
async fn session_readback_returns_role_for_stored_session() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);
    signed_in(&state, "tok-1");
    let app = api::build_app(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/session")
                .header(header::COOKIE, "auth_token=tok-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_json(response.into_body()).await;
    assert_eq!(json["authenticated"], true);
    assert_eq!(json["role"], "admin");
}

#[tokio::test]
async fn stale_cookie_on_protected_api_route_is_unauthorized() {
    // Cookie present (guard allows) but no stored session for its token
    let dir = tempfile::tempdir().unwrap();
    let app = api::build_app(test_state(&dir));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/panel/users")
                .header(header::COOKIE, "auth_token=stale")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["message"], "Please login first");
}

#[tokio::test]
async fn logout_clears_session_and_cookie() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);
    signed_in(&state, "tok-1");
    let sessions = state.sessions.clone();
    let app = api::build_app(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/logout")
                .header(header::COOKIE, "auth_token=tok-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(sessions.get("tok-1").is_none());

    // The removal cookie zeroes auth_token
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("auth_token="));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn login_with_missing_fields_fails_validation_before_any_upstream_call() {
    let dir = tempfile::tempdir().unwrap();
    let app = api::build_app(test_state(&dir));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"document":"","password":"","document_type":"CC"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response.into_body()).await;
    assert_eq!(
        json["message"],
        "Document, document type and password are required"
    );
}
