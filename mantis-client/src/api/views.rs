//! Views API (`/views`)

use crate::{ClientResult, HttpClient};
use shared::client::StatePayload;
use shared::models::{View, ViewCreate, ViewUpdate};

impl HttpClient {
    /// GET /views
    pub async fn list_views(&self) -> ClientResult<Vec<View>> {
        self.get("/views").await
    }

    /// POST /views
    pub async fn create_view(&self, payload: &ViewCreate) -> ClientResult<View> {
        self.post("/views", payload).await
    }

    /// PUT /views/{id}
    pub async fn update_view(&self, id: i64, payload: &ViewUpdate) -> ClientResult<View> {
        self.put(&format!("/views/{id}"), payload).await
    }

    /// PUT /views/{id}/state
    pub async fn set_view_state(&self, id: i64, is_active: bool) -> ClientResult<View> {
        self.put(&format!("/views/{id}/state"), &StatePayload { is_active })
            .await
    }

    /// DELETE /views/{id}
    pub async fn delete_view(&self, id: i64) -> ClientResult<View> {
        self.delete(&format!("/views/{id}")).await
    }
}
