use crate::db::{self, DB};
use crate::error::ApiError;
use crate::models::user::{CredentialsRequest, LoginResponse, RegisterResponse, TokenUser, User};
use crate::state::AppState;
use crate::utils::auth::{hash_password, verify_password};
use crate::utils::validation::{validate_login, validate_registration};
use super::body_or_default;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// Creates a user and returns its id.
///
/// Order matters here: input checks run first, so a short password never costs a
/// hash or a query. The username is lowercased before it reaches the store, and the
/// UNIQUE constraint decides who wins a race for the same name.
pub async fn register_user(
    db: &DB,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<i64, ApiError> {
    let creds = validate_registration(username, password).ok_or(ApiError::InvalidCredentials)?;

    let password_hash = hash_password(&creds.password)
        .map_err(|e| ApiError::internal("Failed to process registration", e))?;

    match db::users::insert(db, &creds.username, &password_hash).await {
        Ok(id) => Ok(id),
        Err(e) if is_unique_violation(&e) => Err(ApiError::UsernameTaken),
        Err(e) => Err(ApiError::internal("Failed to process registration", e)),
    }
}

/// Looks up a user and checks the password.
///
/// Unknown user and wrong password give the same error on purpose, so the endpoint
/// can't be used to probe which usernames exist.
pub async fn authenticate(db: &DB, username: &str, password: &str) -> Result<User, ApiError> {
    let user = db::users::find_by_username(db, &username.to_lowercase())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "user lookup failed during login");
            ApiError::BadCredentials
        })?
        .ok_or(ApiError::BadCredentials)?;

    let matches = verify_password(password, &user.password_hash)
        .map_err(|e| ApiError::internal("Failed to verify credentials", e))?;

    if !matches {
        return Err(ApiError::BadCredentials);
    }

    Ok(user)
}

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let payload = body_or_default(body);
    let user_id = register_user(
        &state.db,
        payload.username.as_deref(),
        payload.password.as_deref(),
    )
    .await?;

    tracing::info!(user_id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let payload = body_or_default(body);
    let creds = validate_login(payload.username.as_deref(), payload.password.as_deref())
        .ok_or(ApiError::MissingCredentials)?;

    let user = authenticate(&state.db, &creds.username, &creds.password).await?;

    let token = state
        .tokens
        .issue(TokenUser {
            id: user.id,
            username: user.username.clone(),
        })
        .map_err(|e| ApiError::internal("Failed to generate token", e))?;

    tracing::info!(user_id = user.id, username = %user.username, "login successful");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user,
    }))
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> DB {
        db::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn duplicate_username_differing_only_in_case_conflicts() {
        let db = test_db().await;

        let first = register_user(&db, Some("Nolan"), Some("secret1")).await;
        let second = register_user(&db, Some("nOLAN"), Some("secret2")).await;

        assert!(first.is_ok());
        assert!(matches!(second, Err(ApiError::UsernameTaken)));
        assert!(db::users::find_by_username(&db, "nolan").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn short_password_never_reaches_the_store() {
        let db = test_db().await;

        let result = register_user(&db, Some("alice"), Some("12345")).await;

        assert!(matches!(result, Err(ApiError::InvalidCredentials)));
        assert!(db::users::find_by_username(&db, "alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn stored_username_is_lowercase() {
        let db = test_db().await;
        register_user(&db, Some("MixedCase"), Some("secret1")).await.unwrap();

        let user = db::users::find_by_username(&db, "mixedcase").await.unwrap().unwrap();
        assert_eq!(user.username, "mixedcase");
        assert_ne!(user.password_hash, "secret1");
    }

    #[tokio::test]
    async fn authenticate_does_not_reveal_which_part_was_wrong() {
        let db = test_db().await;
        register_user(&db, Some("alice"), Some("secret1")).await.unwrap();

        let unknown = authenticate(&db, "bob", "secret1").await.unwrap_err();
        let wrong = authenticate(&db, "alice", "secret2").await.unwrap_err();

        assert!(matches!(unknown, ApiError::BadCredentials));
        assert!(matches!(wrong, ApiError::BadCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn authenticate_is_case_insensitive_on_username() {
        let db = test_db().await;
        let id = register_user(&db, Some("alice"), Some("secret1")).await.unwrap();

        let user = authenticate(&db, "ALICE", "secret1").await.unwrap();
        assert_eq!(user.id, id);
    }
}
