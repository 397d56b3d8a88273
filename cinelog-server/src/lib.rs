//! cinelog-server: HTTP CRUD API over the movies and users tables
//!
//! Exposes list/get/create/update for both resources under `/api`,
//! backed by a shared PostgreSQL connection pool.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::AppConfig;
pub use http::{run_server, ApiError, AppState, ServerConfig};
