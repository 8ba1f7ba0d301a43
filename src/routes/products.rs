use axum::{
    routing::{get, post},
    Router, middleware,
};
use crate::handlers::product::{
    list_products, get_product, add_product, remove_product, check_low_stock
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    // Catalogue lookups are open
    let open_routes = Router::new()
        .route("/products", get(list_products))
        .route("/products/{sku}", get(get_product));

    // Mutations need a manager token, alerts any valid token
    let protected_routes = Router::new()
        .route("/products", post(add_product))
        .route("/products/{sku}", axum::routing::delete(remove_product))
        .route("/products/{sku}/low-stock-check", post(check_low_stock))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    open_routes.merge(protected_routes)
}
