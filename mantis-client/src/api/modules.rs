//! Modules API (`/modulos`)

use crate::{ClientResult, HttpClient};
use shared::client::StatePayload;
use shared::models::{Module, ModuleCreate, ModuleUpdate};

impl HttpClient {
    /// GET /modulos
    pub async fn list_modules(&self) -> ClientResult<Vec<Module>> {
        self.get("/modulos").await
    }

    /// POST /modulos
    pub async fn create_module(&self, payload: &ModuleCreate) -> ClientResult<Module> {
        self.post("/modulos", payload).await
    }

    /// PUT /modulos/{id}
    pub async fn update_module(&self, id: i64, payload: &ModuleUpdate) -> ClientResult<Module> {
        self.put(&format!("/modulos/{id}"), payload).await
    }

    /// PUT /modulos/{id}/state
    pub async fn set_module_state(&self, id: i64, is_active: bool) -> ClientResult<Module> {
        self.put(&format!("/modulos/{id}/state"), &StatePayload { is_active })
            .await
    }

    /// DELETE /modulos/{id}
    pub async fn delete_module(&self, id: i64) -> ClientResult<Module> {
        self.delete(&format!("/modulos/{id}")).await
    }
}
