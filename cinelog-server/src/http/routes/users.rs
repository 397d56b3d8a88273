//! User endpoints
//!
//! Unlike the movie resource, create echoes the stored record (with
//! its database-assigned id) as JSON, and get-by-id does not
//! pre-validate the path id: a non-integer can never match a serial id
//! and simply answers 404.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{User, UserDraft};

/// Create/update user request
#[derive(Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

impl UserPayload {
    fn validate(&self) -> Result<UserDraft, ApiError> {
        Ok(UserDraft::new(&self.name, &self.email)?)
    }
}

/// GET /users - list all users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(&state.pool)
        .list()
        .await
        .map_err(ApiError::db("Error retrieving data from the database"))?;

    Ok(Json(users))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    // No 400 here: a non-integer id matches no row, so it is a 404.
    let Ok(id) = id.parse::<i32>() else {
        return Err(ApiError::NotFound {
            message: "User not found",
        });
    };

    let user = UserRepo::new(&state.pool)
        .get(id)
        .await
        .map_err(ApiError::db("Error retrieving data from the database"))?
        .ok_or(ApiError::NotFound {
            message: "User not found",
        })?;

    Ok(Json(user))
}

/// POST /users - create a user, echoing the stored record
async fn create_user(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let draft = payload.validate()?;

    let user = UserRepo::new(&state.pool)
        .create(&draft)
        .await
        .map_err(ApiError::db("Error creating user"))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/{id} - overwrite name/email
///
/// Answers 200 whether or not a row matched the id.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UserPayload>,
) -> Result<&'static str, ApiError> {
    let draft = payload.validate()?;

    UserRepo::new(&state.pool)
        .update(id, &draft)
        .await
        .map_err(ApiError::db("Error updating user"))?;

    Ok("User updated successfully")
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user))
}
