//! Products API: HTTP CRUD for a product catalog over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod postgres;
pub mod repository;
pub mod response;
pub mod routes;
pub mod state;
pub mod validation;

pub use config::{AppConfig, ConfigError};
pub use error::{AppError, StoreError};
pub use models::{NewProduct, Product, ProductUpdate};
pub use openapi::ApiDoc;
pub use postgres::{ensure_products_table, PgProductRepository};
pub use repository::ProductRepository;
pub use routes::{common_routes, product_routes};
pub use state::AppState;
