use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// GET /health: сервис жив и готов опрашивать принтеры
pub async fn health() -> (StatusCode, Json<Value>) {
    let body = json!({
        "status": "ready",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "UTC_time": chrono::Utc::now().to_rfc2822(),
    });

    (StatusCode::OK, Json(body))
}
