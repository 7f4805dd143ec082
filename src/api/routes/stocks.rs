use crate::api::handlers::stocks;
use crate::api::rest::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new().route("/stocks/{ticker}", get(stocks::get_stock_data))
}
