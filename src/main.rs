//! Process entry: wires the product routes into an HTTP listener.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use products_api::{
    common_routes, ensure_products_table, product_routes, ApiDoc, AppConfig, AppState,
    PgProductRepository,
};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("products_api=info".parse()?),
        )
        .init();

    let config = AppConfig::from_env()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    ensure_products_table(&pool).await?;

    let state = AppState::new(Arc::new(PgProductRepository::new(pool)));

    let app = Router::new()
        .merge(common_routes())
        .route("/api/docs.json", get(openapi_document))
        .nest("/api/products", product_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
