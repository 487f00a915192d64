pub mod auth;
pub mod directors;
pub mod health;
pub mod movies;

use axum::{Json, extract::rejection::JsonRejection};
use serde::Serialize;

/// `{"message": ..., "data": ...}`, the shape every resource route answers with.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Unwraps a JSON body, treating a missing or unreadable one as an empty object.
///
/// Each handler then reports the empty input through its own validation error,
/// so a bad body gets the same status and JSON shape as a body with no fields.
pub(crate) fn body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable request body, treating as empty");
            T::default()
        }
    }
}

/// Row ids are integers. `7`, `07` and `7.0` all name row 7, as they would to SQLite.
/// Anything else can't match a row, so the caller reports not found without a query.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }

    let real = raw.parse::<f64>().ok()?;
    if real.is_finite() && real.fract() == 0.0 && real.abs() < i64::MAX as f64 {
        Some(real as i64)
    } else {
        None
    }
}
