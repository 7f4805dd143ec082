// src/api/routes/system.rs
use crate::api::handlers::system;
use crate::api::rest::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(system::health))
}
