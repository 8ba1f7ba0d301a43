pub mod products;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(products::routes(state))
}

/// Full application: API under `/api`, banner and health check at the root.
pub fn create_app(state: AppState) -> Router {
    let api = create_router(state.clone());

    Router::new()
        .route("/", get(|| async { "Stockwatch API" }))
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
