//! Work orders API (`/word-orden`)
//!
//! The upstream route is spelled "word-orden"; kept verbatim.

use crate::{ClientResult, HttpClient};
use shared::client::StatePayload;
use shared::models::{WorkOrder, WorkOrderCreate, WorkOrderUpdate};

impl HttpClient {
    /// GET /word-orden
    pub async fn list_work_orders(&self) -> ClientResult<Vec<WorkOrder>> {
        self.get("/word-orden").await
    }

    /// POST /word-orden
    pub async fn create_work_order(&self, payload: &WorkOrderCreate) -> ClientResult<WorkOrder> {
        self.post("/word-orden", payload).await
    }

    /// PUT /word-orden/{id}
    pub async fn update_work_order(
        &self,
        id: i64,
        payload: &WorkOrderUpdate,
    ) -> ClientResult<WorkOrder> {
        self.put(&format!("/word-orden/{id}"), payload).await
    }

    /// PUT /word-orden/{id}/state
    pub async fn set_work_order_state(&self, id: i64, is_active: bool) -> ClientResult<WorkOrder> {
        self.put(&format!("/word-orden/{id}/state"), &StatePayload { is_active })
            .await
    }
}
