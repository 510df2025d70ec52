//! Mantis Client - HTTP client for the remote maintenance API
//!
//! One thin wrapper per REST endpoint: build the URL, attach the bearer
//! token, send JSON, unwrap the uniform `{ "message" }` error shape.
//! No retry, no caching, no request deduplication - the remote service
//! owns all business logic.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, RegisterRequest, StatePayload};
