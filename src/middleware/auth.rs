use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Represents an authenticated caller, pulled from the bearer token.
///
/// Add `user: AuthenticatedUser` to a handler and Axum will:
/// 1. Read the Authorization header
/// 2. Verify the JWT signature and expiry
/// 3. Hand you the identity, or answer 401/403 before your handler runs
///
/// Put it before any `Json` extractor so a bad token never costs us a body parse.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Pull the token out of "Bearer <token>".
        // No header, or a header with nothing after the scheme, counts as no token at all.
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(bearer_token)
            .ok_or(ApiError::MissingToken)?;

        // 2. Verify. Anything wrong with a token that *was* sent is a 403.
        let user = state.tokens.verify(token).ok_or(ApiError::InvalidToken)?;

        Ok(AuthenticatedUser {
            user_id: user.id,
            username: user.username,
        })
    }
}

/// Second whitespace-separated part of the header value. The scheme word isn't checked;
/// whatever follows it gets verified and fails there if it's junk.
fn bearer_token(header: &str) -> Option<&str> {
    header.split_whitespace().nth(1)
}
