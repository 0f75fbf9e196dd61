//! Resource handlers: one function per operation.
//!
//! Each request moves received -> validated -> store-op -> responded. Store
//! failures propagate as `AppError::Store` and map to a 500, so no request
//! is left without a response.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::error::AppError;
use crate::models::{NewProduct, ProductUpdate};
use crate::response;
use crate::state::AppState;
use crate::validation::{self, FieldRule, CREATE_RULES, UPDATE_RULES};

/// Validate the path id together with the body rules, aggregating every
/// violation into a single 400 before any store access.
fn check_request(raw_id: &str, rules: &[FieldRule], body: &Value) -> Result<i32, AppError> {
    let mut errors = Vec::new();
    let id = match validation::parse_id(raw_id) {
        Ok(id) => Some(id),
        Err(e) => {
            errors.push(e);
            None
        }
    };
    errors.extend(validation::check_body(rules, body));
    match (id, errors.is_empty()) {
        (Some(id), true) => Ok(id),
        _ => Err(AppError::Validation(errors)),
    }
}

/// List all products, ordered by ascending id.
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = [crate::models::Product])
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = state.repo.list().await?;
    Ok(response::ok(products))
}

/// Fetch one product by id.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = crate::models::Product),
        (status = 400, description = "Non-integer id"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = check_request(&id, &[], &Value::Null)?;
    let product = state
        .repo
        .find(id)
        .await?
        .ok_or_else(AppError::product_not_found)?;
    Ok(response::ok(product))
}

/// Create a product. The store assigns the id and defaults availability.
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Created product", body = crate::models::Product),
        (status = 400, description = "Validation errors")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    validation::reject_if_invalid(validation::check_body(CREATE_RULES, &body))?;
    let product = state.repo.create(NewProduct::from_valid_body(&body)).await?;
    Ok(response::created(product))
}

/// Replace every mutable field of a product.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductUpdate,
    responses(
        (status = 200, description = "Updated product", body = crate::models::Product),
        (status = 400, description = "Validation errors"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = check_request(&id, UPDATE_RULES, &body)?;
    let product = state
        .repo
        .update(id, ProductUpdate::from_valid_body(&body))
        .await?
        .ok_or_else(AppError::product_not_found)?;
    Ok(response::ok(product))
}

/// Flip the availability flag of a product.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product with flipped availability", body = crate::models::Product),
        (status = 400, description = "Non-integer id"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn toggle_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = check_request(&id, &[], &Value::Null)?;
    let product = state
        .repo
        .toggle_availability(id)
        .await?
        .ok_or_else(AppError::product_not_found)?;
    Ok(response::ok(product))
}

/// Remove a product permanently.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Deletion confirmation"),
        (status = 400, description = "Non-integer id"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = check_request(&id, &[], &Value::Null)?;
    state
        .repo
        .delete(id)
        .await?
        .ok_or_else(AppError::product_not_found)?;
    Ok(response::ok("Product deleted"))
}
