//! Endpoint wrappers, one module per remote resource
//!
//! Paths are dictated by the remote API and kept verbatim (Spanish resource
//! names included). Each wrapper is a thin call through
//! [`HttpClient`](crate::HttpClient); nothing here adds logic beyond that.

mod action_log;
mod auth;
mod categories;
mod maintenance;
mod modules;
mod roles;
mod system_config;
mod users;
mod views;
mod work_orders;
