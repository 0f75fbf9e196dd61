//! PostgreSQL-backed product repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::{NewProduct, Product, ProductUpdate};
use crate::repository::ProductRepository;

const PRODUCT_COLUMNS: &str = "id, name, price, availability";

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Idempotent schema bootstrap. The check constraint backs the price
/// invariant at the store level; the API rejects violations earlier.
pub async fn ensure_products_table(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
          id SERIAL PRIMARY KEY,
          name TEXT NOT NULL,
          price DOUBLE PRECISION NOT NULL CHECK (price > 0),
          availability BOOLEAN NOT NULL DEFAULT TRUE,
          created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
          updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id ASC");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find(&self, id: i32) -> Result<Option<Product>, StoreError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        let sql = format!(
            "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING {PRODUCT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(input.name)
            .bind(input.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, input: ProductUpdate) -> Result<Option<Product>, StoreError> {
        let sql = format!(
            "UPDATE products \
             SET name = $2, price = $3, availability = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(input.name)
            .bind(input.price)
            .bind(input.availability)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn toggle_availability(&self, id: i32) -> Result<Option<Product>, StoreError> {
        let sql = format!(
            "UPDATE products \
             SET availability = NOT availability, updated_at = NOW() \
             WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<Option<()>, StoreError> {
        let deleted = sqlx::query("DELETE FROM products WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted.map(|_| ()))
    }
}
