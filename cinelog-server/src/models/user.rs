//! User record and validated draft

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use sqlx::FromRow;

use super::ValidationError;

/// Email syntax: one `@`, non-empty local part, dotted domain.
/// Intentionally permissive; uniqueness is left to the storage schema.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// User row as stored; `id` is assigned by the database on insert.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Validated user payload for create/update
#[derive(Debug, Clone)]
pub struct UserDraft {
    name: String,
    email: String,
}

impl UserDraft {
    /// Validate a user payload, reporting the first violated constraint.
    ///
    /// # Rules
    /// - `name` non-empty
    /// - `email` syntactically valid
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must be a valid email",
            });
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
