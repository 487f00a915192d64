use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Every way a request can fail, mapped onto the status codes clients already rely on.
///
/// Some of these codes are odd (404 for a create with missing fields, 400 for a failed
/// read). They are kept as-is because existing clients branch on them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username or password is missing")]
    MissingCredentials,

    #[error("All fields are required")]
    MissingFields,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Username or password is incorrect")]
    BadCredentials,

    #[error("No token provided")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("{0}")]
    NotFound(&'static str),

    /// Store failure on a read path.
    #[error("{0}")]
    Query(#[source] sqlx::Error),

    /// Store failure on a write path.
    #[error("{0}")]
    Store(#[from] sqlx::Error),

    /// Hashing or signing blew up. The detail is logged, never returned.
    #[error("{public}")]
    Internal {
        public: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(public: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            public,
            source: source.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::MissingCredentials | Self::Query(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingFields | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UsernameTaken => StatusCode::CONFLICT,
            Self::BadCredentials | Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::Store(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Internal { source, .. } => tracing::error!(error = ?source, "{}", self),
            Self::Store(e) | Self::Query(e) => tracing::error!(error = %e, "store error"),
            _ => tracing::debug!(status = status.as_u16(), "{}", self),
        }

        // Not-found uses `message`, everything else `error`. Clients key off both.
        let body = match self {
            Self::NotFound(msg) => json!({ "message": msg }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
