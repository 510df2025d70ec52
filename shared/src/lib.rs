//! Shared types for the Mantis panel
//!
//! Entity records mirrored from the remote maintenance API plus the
//! request/response types used between the panel server and its client crate.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
