use axum::{Json, http::StatusCode};
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    pub ok: bool,
    pub status: String,
    pub service: String,
}

/// Liveness probe. Doesn't touch the database, just says the process is up.
pub async fn status() -> (StatusCode, Json<StatusResponse>) {
    let response = StatusResponse {
        ok: true,
        status: "Server is running.".to_string(),
        service: "Movie API".to_string(),
    };

    (StatusCode::OK, Json(response))
}
