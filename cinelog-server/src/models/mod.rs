//! Domain models and request validation

pub mod movie;
pub mod user;
pub mod validation;

pub use movie::{Movie, MovieDraft, MIN_MOVIE_YEAR};
pub use user::{User, UserDraft};
pub use validation::ValidationError;
