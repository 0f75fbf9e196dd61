//! Repository trait for product persistence.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{NewProduct, Product, ProductUpdate};

/// Data access contract for products. The production implementation runs
/// against PostgreSQL; tests substitute an in-memory store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by ascending id.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    async fn find(&self, id: i32) -> Result<Option<Product>, StoreError>;

    /// Insert with store-assigned id; availability defaults to true.
    async fn create(&self, input: NewProduct) -> Result<Product, StoreError>;

    /// Full field replacement. `None` when no product has this id.
    async fn update(&self, id: i32, input: ProductUpdate) -> Result<Option<Product>, StoreError>;

    /// Flip the availability flag in place.
    async fn toggle_availability(&self, id: i32) -> Result<Option<Product>, StoreError>;

    /// Hard removal. `None` when no product has this id.
    async fn delete(&self, id: i32) -> Result<Option<()>, StoreError>;
}
