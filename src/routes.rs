//! Router binding HTTP method + path to the product handlers.

use axum::{routing::get, Json, Router};

use crate::handlers::{
    create_product, delete_product, get_product, list_products, toggle_availability,
    update_product,
};
use crate::state::AppState;

/// Routes for the product resource, to be nested under `/api/products`.
pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(state)
}

/// Common routes: liveness info and version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/api", get(api_info))
        .route("/health", get(health))
        .route("/version", get(version))
}

async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "msg": "products API up" }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
