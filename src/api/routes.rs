use crate::api::rest::AppState;
use axum::Router;

pub mod stocks;
pub mod system;

pub fn api_routes() -> Router<AppState> {
    Router::new().merge(stocks::routes()).merge(system::routes())
}
