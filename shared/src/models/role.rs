//! Role Model

use serde::{Deserialize, Serialize};

/// Role entity (a named permission set referencing view identifiers)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// IDs of the views this role may navigate to
    #[serde(default)]
    pub view_ids: Vec<i64>,
    pub is_active: bool,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCreate {
    pub name: String,
    pub description: Option<String>,
    pub view_ids: Vec<i64>,
}

/// Update role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub view_ids: Option<Vec<i64>>,
    pub is_active: Option<bool>,
}
