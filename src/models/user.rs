use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// PHC-format Argon2 hash. Never serialized: it must not leave the server.
    #[serde(skip_serializing)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

/// Body for both `/auth/register` and `/auth/login`.
///
/// Both fields are optional so a missing one gets our 400 instead of axum's 422.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

/// Identity carried inside the token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenUser {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub user: TokenUser,
    pub iat: i64,
    pub exp: i64,
}
