//! Users API (`/users`)

use crate::{ClientResult, HttpClient};
use shared::client::StatePayload;
use shared::models::{User, UserCreate, UserUpdate};

impl HttpClient {
    /// GET /users
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.get("/users").await
    }

    /// GET /users?role={name} - technician/instructor pickers
    pub async fn list_users_by_role(&self, role: &str) -> ClientResult<Vec<User>> {
        self.get(&format!("/users?role={role}")).await
    }

    /// POST /users
    pub async fn create_user(&self, payload: &UserCreate) -> ClientResult<User> {
        self.post("/users", payload).await
    }

    /// PUT /users/{id}
    pub async fn update_user(&self, id: i64, payload: &UserUpdate) -> ClientResult<User> {
        self.put(&format!("/users/{id}"), payload).await
    }

    /// PUT /users/{id}/state
    pub async fn set_user_state(&self, id: i64, is_active: bool) -> ClientResult<User> {
        self.put(&format!("/users/{id}/state"), &StatePayload { is_active })
            .await
    }
}
