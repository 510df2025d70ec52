//! Auth API

use crate::{ClientResult, HttpClient};
use shared::client::{LoginRequest, LoginResponse, RegisterRequest};
use shared::models::User;

impl HttpClient {
    /// POST /auth/login
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        self.post("/auth/login", request).await
    }

    /// POST /auth/register
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<User> {
        self.post("/auth/register", request).await
    }
}
