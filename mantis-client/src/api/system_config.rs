//! System config API (`/config`)

use crate::{ClientResult, HttpClient};
use shared::models::{SystemConfig, SystemConfigUpdate};

impl HttpClient {
    /// GET /config
    pub async fn get_config(&self) -> ClientResult<SystemConfig> {
        self.get("/config").await
    }

    /// PUT /config
    pub async fn update_config(&self, payload: &SystemConfigUpdate) -> ClientResult<SystemConfig> {
        self.put("/config", payload).await
    }
}
