//! Client-related types shared between the panel server and its API client
//!
//! Common request/response types used in API communication. The remote
//! service reports every failure with the same `{ "message": ... }` body;
//! [`ErrorMessage`] is that shape, reused by the panel when it surfaces
//! upstream errors to the shell.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
///
/// Credentials are a national ID document plus its type code, matching the
/// remote `/auth/login` contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub document: String,
    pub password: String,
    pub document_type: String,
}

/// Login response data: bearer token plus the permission menu and role
/// the shell persists for the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub menu: Vec<MenuModule>,
    pub role: String,
}

/// Registration request forwarded to `/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub document: String,
    pub document_type: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

// =============================================================================
// Permission menu
// =============================================================================

/// A module entry in the permission menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuModule {
    pub id: i64,
    pub name: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub views: Vec<MenuView>,
}

/// A navigable view entry inside a menu module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuView {
    pub id: i64,
    pub name: String,
    pub route: String,
    pub icon: Option<String>,
}

/// Flatten a permission menu into the set of routes it grants
pub fn menu_routes(menu: &[MenuModule]) -> Vec<&str> {
    menu.iter()
        .flat_map(|m| m.views.iter().map(|v| v.route.as_str()))
        .collect()
}

// =============================================================================
// Common payloads
// =============================================================================

/// State-toggle payload shared by every `PUT {resource}/{id}/state` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatePayload {
    pub is_active: bool,
}

/// Uniform error body used by the remote API and mirrored by the panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Vec<MenuModule> {
        vec![
            MenuModule {
                id: 1,
                name: "Administration".into(),
                icon: Some("settings".into()),
                views: vec![
                    MenuView {
                        id: 10,
                        name: "Users".into(),
                        route: "/panel/users".into(),
                        icon: None,
                    },
                    MenuView {
                        id: 11,
                        name: "Roles".into(),
                        route: "/panel/roles".into(),
                        icon: None,
                    },
                ],
            },
            MenuModule {
                id: 2,
                name: "Maintenance".into(),
                icon: None,
                views: vec![MenuView {
                    id: 20,
                    name: "Work orders".into(),
                    route: "/panel/work-orders".into(),
                    icon: None,
                }],
            },
        ]
    }

    #[test]
    fn menu_routes_flattens_all_views() {
        let menu = sample_menu();
        let routes = menu_routes(&menu);
        assert_eq!(
            routes,
            vec!["/panel/users", "/panel/roles", "/panel/work-orders"]
        );
    }

    #[test]
    fn menu_module_views_default_to_empty() {
        // A module without views deserializes with an empty list
        let module: MenuModule =
            serde_json::from_str(r#"{"id": 3, "name": "Reports", "icon": null}"#).unwrap();
        assert!(module.views.is_empty());
    }
}
