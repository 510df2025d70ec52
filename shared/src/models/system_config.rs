//! System Config Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// System configuration singleton
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub id: i64,
    pub site_name: String,
    pub contact_email: String,
    /// Whether the public landing accepts new maintenance requests
    pub intake_enabled: bool,
    /// Optional notice shown on the login page
    pub session_notice: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Update system config payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfigUpdate {
    pub site_name: Option<String>,
    pub contact_email: Option<String>,
    pub intake_enabled: Option<bool>,
    pub session_notice: Option<String>,
}
