//! Movie record and validated draft
//!
//! A draft is the checked form of a create/update body: non-empty title
//! and director, year within [1900, current calendar year].

use chrono::{Datelike, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::ValidationError;

/// Earliest accepted release year
pub const MIN_MOVIE_YEAR: i32 = 1900;

/// Movie row as stored; `id` is assigned by the database on insert.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub director: String,
    pub year: i32,
}

/// Validated movie payload for create/update
#[derive(Debug, Clone)]
pub struct MovieDraft {
    title: String,
    director: String,
    year: i32,
}

impl MovieDraft {
    /// Validate a movie payload, reporting the first violated constraint.
    ///
    /// # Rules
    /// - `title` non-empty
    /// - `director` non-empty
    /// - `year` in [1900, current calendar year]
    pub fn new(title: &str, director: &str, year: i32) -> Result<Self, ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if director.is_empty() {
            return Err(ValidationError::Empty { field: "director" });
        }

        let max_year = current_year();
        if year < MIN_MOVIE_YEAR || year > max_year {
            return Err(ValidationError::OutOfRange {
                field: "year",
                min: MIN_MOVIE_YEAR,
                max: max_year,
            });
        }

        Ok(Self {
            title: title.to_owned(),
            director: director.to_owned(),
            year,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

fn current_year() -> i32 {
    Utc::now().year()
}
