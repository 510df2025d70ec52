//! View Model

use serde::{Deserialize, Serialize};

/// View entity: a navigable route entry in the permission menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct View {
    pub id: i64,
    pub name: String,
    /// Route path the shell navigates to (e.g. "/panel/users")
    pub route: String,
    pub icon: Option<String>,
    /// Module this view is grouped under
    pub module_id: i64,
    pub is_active: bool,
}

/// Create view payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewCreate {
    pub name: String,
    pub route: String,
    pub icon: Option<String>,
    pub module_id: i64,
}

/// Update view payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewUpdate {
    pub name: Option<String>,
    pub route: Option<String>,
    pub icon: Option<String>,
    pub module_id: Option<i64>,
    pub is_active: Option<bool>,
}
