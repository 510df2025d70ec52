//! Module Model

use serde::{Deserialize, Serialize};

/// Module entity: a logical grouping of views in the permission menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: i64,
    pub name: String,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

/// Create module payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleCreate {
    pub name: String,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
}

/// Update module payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleUpdate {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
