use super::{DataResponse, body_or_default, parse_id};
use crate::db;
use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::director::{Director, DirectorInput};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

const NOT_FOUND: &str = "Director not found";

pub async fn list_directors(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Director>>>, ApiError> {
    let directors = db::directors::list(&state.db).await.map_err(ApiError::Query)?;
    Ok(Json(DataResponse::new("success", directors)))
}

pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Vec<Director>>>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound(NOT_FOUND))?;

    let rows = db::directors::get(&state.db, id).await.map_err(ApiError::Query)?;
    if rows.is_empty() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    Ok(Json(DataResponse::new("success", rows)))
}

pub async fn create_director(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Result<Json<DirectorInput>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Director>>), ApiError> {
    tracing::info!(user_id = user.user_id, username = %user.username, "POST /directors");

    let director = body_or_default(body).require_all().ok_or(ApiError::MissingFields)?;
    let id = db::directors::insert(&state.db, &director).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Director created", director.with_id(id))),
    ))
}

pub async fn update_director(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    body: Result<Json<DirectorInput>, JsonRejection>,
) -> Result<Json<DataResponse<Director>>, ApiError> {
    tracing::info!(user_id = user.user_id, username = %user.username, director_id = %id, "PUT /directors");

    let id = parse_id(&id).ok_or(ApiError::NotFound(NOT_FOUND))?;
    let payload = body_or_default(body);

    let changed =
        db::directors::update(&state.db, id, payload.name.as_deref(), payload.birth_year).await?;

    if changed == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    let director = Director {
        id,
        name: payload.name.unwrap_or_default(),
        birth_year: payload.birth_year.unwrap_or_default(),
    };

    Ok(Json(DataResponse::new("Director updated", director)))
}

pub async fn delete_director(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(user_id = user.user_id, username = %user.username, director_id = %id, "DELETE /directors");

    let id = parse_id(&id).ok_or(ApiError::NotFound(NOT_FOUND))?;

    if db::directors::delete(&state.db, id).await? == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    Ok(StatusCode::NO_CONTENT)
}
