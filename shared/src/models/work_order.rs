//! Work Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Work order status, owned by the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    /// Display label used by the panel tables
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Work order priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderPriority {
    Low,
    Medium,
    High,
}

impl WorkOrderPriority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Wire value, matching the serde representation
    pub fn code(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Work order entity
///
/// Technician, instructor and originating request are foreign keys resolved
/// by separate fetches and joined in the panel tier for display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: i64,
    pub code: String,
    pub description: String,
    pub status: WorkOrderStatus,
    pub priority: WorkOrderPriority,
    /// Assigned technician (user id)
    pub technician_id: Option<i64>,
    /// Supervising instructor (user id)
    pub instructor_id: Option<i64>,
    /// Originating maintenance request
    pub request_id: Option<i64>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create work order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrderCreate {
    pub description: String,
    pub priority: WorkOrderPriority,
    pub technician_id: Option<i64>,
    pub instructor_id: Option<i64>,
    pub request_id: Option<i64>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

/// Update work order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrderUpdate {
    pub description: Option<String>,
    pub status: Option<WorkOrderStatus>,
    pub priority: Option<WorkOrderPriority>,
    pub technician_id: Option<i64>,
    pub instructor_id: Option<i64>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}
