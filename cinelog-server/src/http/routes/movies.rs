//! Movie endpoints
//!
//! Create answers 201 with a plain-text message and does not echo the
//! record; that asymmetry with user-create is part of the published
//! contract. Get-by-id pre-parses the path id and answers 400 on a
//! non-integer, which the user resource does not do.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::MovieRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{Movie, MovieDraft};

/// Create/update movie request
#[derive(Deserialize)]
pub struct MoviePayload {
    pub title: String,
    pub director: String,
    pub year: i32,
}

impl MoviePayload {
    fn validate(&self) -> Result<MovieDraft, ApiError> {
        Ok(MovieDraft::new(&self.title, &self.director, self.year)?)
    }
}

/// GET /movies - list all movies
async fn list_movies(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = MovieRepo::new(&state.pool)
        .list()
        .await
        .map_err(ApiError::db("Error retrieving data from the database"))?;

    Ok(Json(movies))
}

/// GET /movies/{id} - get a single movie
///
/// The id is parsed by hand so a non-integer answers 400 before any
/// query runs.
async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let id: i32 = id.parse().map_err(|_| ApiError::BadId {
        message: "Invalid movie ID",
    })?;

    let movie = MovieRepo::new(&state.pool)
        .get(id)
        .await
        .map_err(ApiError::db("Error retrieving data from the database"))?
        .ok_or(ApiError::NotFound {
            message: "Movie not found",
        })?;

    Ok(Json(movie))
}

/// POST /movies - create a movie (no body echoed back)
async fn create_movie(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<MoviePayload>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let draft = payload.validate()?;

    MovieRepo::new(&state.pool)
        .create(&draft)
        .await
        .map_err(ApiError::db("Error creating movie"))?;

    Ok((StatusCode::CREATED, "Movie created successfully"))
}

/// PUT /movies/{id} - overwrite title/director/year
///
/// Answers 200 whether or not a row matched the id.
async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<MoviePayload>,
) -> Result<&'static str, ApiError> {
    let draft = payload.validate()?;

    MovieRepo::new(&state.pool)
        .update(id, &draft)
        .await
        .map_err(ApiError::db("Error updating movie"))?;

    Ok("Movie updated successfully")
}

/// Movie routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/{id}", get(get_movie).put(update_movie))
}
