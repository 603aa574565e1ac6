use axum::{http::StatusCode, Json};

#[derive(serde::Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Responds with the health status of the server.
///
/// This endpoint has no backing dependencies; a response at all means the
/// HTTP layer and the request pipeline are up.
///
/// # Responses
/// - `200 OK` with `{ "status": "ok" }`.
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}
