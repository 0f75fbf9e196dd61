//! Product entity and validated input types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::validation::numeric_value;

/// A catalog product. Audit timestamps live in the table but are never
/// part of the API surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, immutable after creation.
    pub id: i32,
    pub name: String,
    /// Always strictly greater than 0 for persisted records.
    pub price: f64,
    pub availability: bool,
}

/// Fields for the create operation. Availability defaults at the store.
#[derive(Debug, Clone, ToSchema)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// Full field replacement for the update operation.
#[derive(Debug, Clone, ToSchema)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

impl NewProduct {
    /// Build from a body that already passed the create rules.
    pub fn from_valid_body(body: &Value) -> Self {
        NewProduct {
            name: string_field(body, "name"),
            price: body.get("price").and_then(numeric_value).unwrap_or_default(),
        }
    }
}

impl ProductUpdate {
    /// Build from a body that already passed the update rules.
    pub fn from_valid_body(body: &Value) -> Self {
        ProductUpdate {
            name: string_field(body, "name"),
            price: body.get("price").and_then(numeric_value).unwrap_or_default(),
            availability: body
                .get("availability")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        }
    }
}

/// Scalars normalize to their string form, matching what the validation
/// rules accept for presence.
fn string_field(body: &Value, field: &str) -> String {
    match body.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
