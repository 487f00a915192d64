use super::{DataResponse, body_or_default, parse_id};
use crate::db;
use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::movie::{Movie, MovieInput};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

const NOT_FOUND: &str = "Movie not found";

/// Lists every movie, oldest id first.
pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Movie>>>, ApiError> {
    let movies = db::movies::list(&state.db).await.map_err(ApiError::Query)?;
    Ok(Json(DataResponse::new("success", movies)))
}

/// Gets one movie. `data` is still an array (of one) for client compatibility.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Vec<Movie>>>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound(NOT_FOUND))?;

    let rows = db::movies::get(&state.db, id).await.map_err(ApiError::Query)?;
    if rows.is_empty() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    Ok(Json(DataResponse::new("success", rows)))
}

pub async fn create_movie(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Movie>>), ApiError> {
    tracing::info!(user_id = user.user_id, username = %user.username, "POST /movies");

    let movie = body_or_default(body).require_all().ok_or(ApiError::MissingFields)?;
    let id = db::movies::insert(&state.db, &movie).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Movie created", movie.with_id(id))),
    ))
}

/// Replaces every field of a movie. No partial updates: omitted fields are sent
/// to the store as NULL and rejected there.
pub async fn update_movie(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<Json<DataResponse<Movie>>, ApiError> {
    tracing::info!(user_id = user.user_id, username = %user.username, movie_id = %id, "PUT /movies");

    let id = parse_id(&id).ok_or(ApiError::NotFound(NOT_FOUND))?;
    let payload = body_or_default(body);

    let changed = db::movies::update(
        &state.db,
        id,
        payload.title.as_deref(),
        payload.director.as_deref(),
        payload.year,
    )
    .await?;

    if changed == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    // The write succeeded, so the NOT NULL columns were all supplied.
    let movie = Movie {
        id,
        title: payload.title.unwrap_or_default(),
        director: payload.director.unwrap_or_default(),
        year: payload.year.unwrap_or_default(),
    };

    Ok(Json(DataResponse::new("Movie updated", movie)))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(user_id = user.user_id, username = %user.username, movie_id = %id, "DELETE /movies");

    let id = parse_id(&id).ok_or(ApiError::NotFound(NOT_FOUND))?;

    if db::movies::delete(&state.db, id).await? == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    Ok(StatusCode::NO_CONTENT)
}
