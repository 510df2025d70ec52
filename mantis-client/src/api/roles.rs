//! Roles API (`/rol`)

use crate::{ClientResult, HttpClient};
use shared::client::StatePayload;
use shared::models::{Role, RoleCreate, RoleUpdate};

impl HttpClient {
    /// GET /rol
    pub async fn list_roles(&self) -> ClientResult<Vec<Role>> {
        self.get("/rol").await
    }

    /// POST /rol
    pub async fn create_role(&self, payload: &RoleCreate) -> ClientResult<Role> {
        self.post("/rol", payload).await
    }

    /// PUT /rol/{id}
    pub async fn update_role(&self, id: i64, payload: &RoleUpdate) -> ClientResult<Role> {
        self.put(&format!("/rol/{id}"), payload).await
    }

    /// PUT /rol/{id}/state
    pub async fn set_role_state(&self, id: i64, is_active: bool) -> ClientResult<Role> {
        self.put(&format!("/rol/{id}/state"), &StatePayload { is_active })
            .await
    }
}
