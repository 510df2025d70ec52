//! Mantis Panel Server - serving tier for the maintenance admin panel
//!
//! A thin gateway in front of the remote maintenance API:
//!
//! - **Sessions** (`auth`): cookie-backed session store holding the bearer
//!   token, permission menu and role per signed-in user
//! - **Route guard** (`auth::middleware`): cookie-only gating of `/panel`
//!   page routes, redirects between `/login` and `/panel`
//! - **Pages** (`api`): per-entity handlers that fetch lists upstream, join
//!   references for display and return table/form configuration models
//! - **UI models** (`ui`): the configuration objects the panel shell renders
//!
//! All business logic, validation, persistence and authorization live in the
//! remote API; nothing is enforced locally.

pub mod api;
pub mod auth;
pub mod core;
pub mod ui;

// Re-export public types
pub use auth::{CurrentSession, Session, SessionStore};
pub use core::{AppConfig, AppError, AppResult, AppState};
