use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_catalog::Catalog;
use storefront_core::ProductId;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

/// `GET /products` with an optional `?category=` filter.
///
/// An absent or empty filter returns the full set in storage order; an
/// unmatched filter returns an empty array, never an error.
pub async fn list_products(
    Extension(catalog): Extension<Arc<Catalog>>,
    Query(query): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    let products: Vec<&storefront_catalog::Product> = match query.category.as_deref() {
        Some(category) if !category.is_empty() => catalog.filter_by_category(category),
        _ => catalog.all().iter().collect(),
    };

    let items = products
        .into_iter()
        .map(dto::product_to_json)
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(items)).into_response()
}

/// `GET /products/:id`.
///
/// The id is typed at the routing layer; a path segment that does not parse
/// as an integer never reaches this handler.
pub async fn get_product(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<u32>,
) -> axum::response::Response {
    match catalog.get(ProductId::new(id)) {
        Ok(product) => (StatusCode::OK, Json(dto::product_to_json(product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
