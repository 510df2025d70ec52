//! Maintenance requests API (`/application-maintenance`)

use crate::{ClientResult, HttpClient};
use shared::models::{MaintenanceRequest, MaintenanceRequestCreate, RequestStatus};

impl HttpClient {
    /// POST /application-maintenance - public landing submission
    pub async fn submit_maintenance_request(
        &self,
        payload: &MaintenanceRequestCreate,
    ) -> ClientResult<MaintenanceRequest> {
        self.post("/application-maintenance", payload).await
    }

    /// GET /application-maintenance
    pub async fn list_maintenance_requests(&self) -> ClientResult<Vec<MaintenanceRequest>> {
        self.get("/application-maintenance").await
    }

    /// PUT /application-maintenance/{id}/status
    pub async fn set_maintenance_request_status(
        &self,
        id: i64,
        status: RequestStatus,
    ) -> ClientResult<MaintenanceRequest> {
        #[derive(serde::Serialize)]
        struct StatusPayload {
            status: RequestStatus,
        }

        self.put(
            &format!("/application-maintenance/{id}/status"),
            &StatusPayload { status },
        )
        .await
    }
}
