//! Action Log Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Action log entry, read-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLog {
    pub id: i64,
    /// User who performed the action, resolved against `/users` for display
    pub user_id: i64,
    /// Action verb ("create", "update", "state_change", ...)
    pub action: String,
    /// Entity name the action touched ("user", "work_order", ...)
    pub entity: String,
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}
