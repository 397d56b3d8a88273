//! Route modules; each exports its own `router()`

pub mod health;
pub mod movies;
pub mod users;
pub mod welcome;

use std::sync::Arc;

use axum::Router;

use super::server::AppState;

/// Resource routes mounted under `/api`
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(movies::router())
        .merge(users::router())
}
