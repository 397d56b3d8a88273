//! Database layer: connection pool, startup schema, repositories

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{DbError, MovieRepo, UserRepo};
