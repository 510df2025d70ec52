//! HTTP client for the remote maintenance API
//!
//! Endpoint wrappers live in [`crate::api`]; this module only knows how to
//! send a request with the bearer header and turn a non-2xx response into
//! a [`ClientError`].

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::client::ErrorMessage;

/// HTTP client for making network requests to the remote API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.delete(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!(status = %status, "API request failed");
            return Err(error_from_status(status, &text));
        }

        response.json().await.map_err(Into::into)
    }
}

/// Map a non-2xx status and body onto a [`ClientError`]
///
/// The remote API reports every failure as `{ "message": ... }`; bodies that
/// do not parse fall back to the raw text.
fn error_from_status(status: StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorMessage>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        _ => ClientError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_is_extracted() {
        let err = error_from_status(StatusCode::BAD_REQUEST, r#"{"message":"document taken"}"#);
        assert!(matches!(err, ClientError::Validation(m) if m == "document taken"));
    }

    #[test]
    fn error_body_without_message_falls_back_to_raw_text() {
        let err = error_from_status(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded");
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unauthorized_discards_the_body() {
        let err = error_from_status(StatusCode::UNAUTHORIZED, r#"{"message":"expired"}"#);
        assert!(matches!(err, ClientError::Unauthorized));
    }

    #[test]
    fn status_mapping_covers_known_codes() {
        assert!(matches!(
            error_from_status(StatusCode::FORBIDDEN, r#"{"message":"no"}"#),
            ClientError::Forbidden(_)
        ));
        assert!(matches!(
            error_from_status(StatusCode::NOT_FOUND, r#"{"message":"gone"}"#),
            ClientError::NotFound(_)
        ));
    }

    #[test]
    fn url_join_normalizes_slashes() {
        let client = ClientConfig::new("http://localhost:3000/").build_http_client();
        assert_eq!(client.url("/users"), "http://localhost:3000/users");
        assert_eq!(client.url("users"), "http://localhost:3000/users");
    }
}
