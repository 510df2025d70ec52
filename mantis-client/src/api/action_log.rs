//! Action log API (`/action-log`)

use crate::{ClientResult, HttpClient};
use shared::models::ActionLog;

impl HttpClient {
    /// GET /action-log
    pub async fn list_action_logs(&self) -> ClientResult<Vec<ActionLog>> {
        self.get("/action-log").await
    }
}
