//! Maintenance Request Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maintenance request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Received,
    InReview,
    /// A work order was created from this request
    Converted,
    Closed,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::InReview => "In review",
            Self::Converted => "Converted",
            Self::Closed => "Closed",
        }
    }
}

/// Maintenance request submitted from the public landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: i64,
    pub requester_name: String,
    pub document: String,
    pub email: String,
    pub phone: Option<String>,
    /// Free-text location description given by the requester
    pub location: String,
    pub category_id: Option<i64>,
    pub description: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRequestCreate {
    pub requester_name: String,
    pub document: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: String,
    pub category_id: Option<i64>,
    pub description: String,
}
