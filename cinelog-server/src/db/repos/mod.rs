//! Repositories: one parameterized statement per operation

pub mod movies;
pub mod users;

pub use movies::MovieRepo;
pub use users::UserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
