//! Generated OpenAPI document for the product routes. Document only; no
//! rendering UI is mounted.

use utoipa::OpenApi;

use crate::models::{NewProduct, Product, ProductUpdate};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::list_products,
        crate::handlers::get_product,
        crate::handlers::create_product,
        crate::handlers::update_product,
        crate::handlers::toggle_availability,
        crate::handlers::delete_product,
    ),
    components(schemas(Product, NewProduct, ProductUpdate)),
    tags(
        (name = "Products", description = "Product catalog operations")
    )
)]
pub struct ApiDoc;
