//! Core types: configuration, state, errors

pub mod config;
pub mod error;
pub mod state;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use state::AppState;
