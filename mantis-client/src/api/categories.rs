//! Categories API (`/categorias`)

use crate::{ClientResult, HttpClient};
use shared::client::StatePayload;
use shared::models::{Category, CategoryCreate, CategoryUpdate};

impl HttpClient {
    /// GET /categorias
    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.get("/categorias").await
    }

    /// POST /categorias
    pub async fn create_category(&self, payload: &CategoryCreate) -> ClientResult<Category> {
        self.post("/categorias", payload).await
    }

    /// PUT /categorias/{id}
    pub async fn update_category(
        &self,
        id: i64,
        payload: &CategoryUpdate,
    ) -> ClientResult<Category> {
        self.put(&format!("/categorias/{id}"), payload).await
    }

    /// PUT /categorias/{id}/state
    pub async fn set_category_state(&self, id: i64, is_active: bool) -> ClientResult<Category> {
        self.put(&format!("/categorias/{id}/state"), &StatePayload { is_active })
            .await
    }
}
