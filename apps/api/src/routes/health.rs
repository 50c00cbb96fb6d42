use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub time: String,
}

/// GET /api/health
/// Always "ok", with the current UTC time as ISO-8601 ending in `Z`.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}
