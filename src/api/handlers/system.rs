use axum::{response::IntoResponse, Json};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Instant;

/// 服務啟動時間點，由 RestApi 啟動時固定
pub static SERVER_START: Lazy<Instant> = Lazy::new(Instant::now);

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: u64,
}

pub async fn health() -> impl IntoResponse {
    let health_response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: SERVER_START.elapsed().as_secs(),
    };

    Json(health_response)
}
