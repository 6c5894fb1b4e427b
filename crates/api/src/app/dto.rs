use serde::Deserialize;

use storefront_catalog::Product;
use storefront_core::Entity;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id().get(),
        "name": product.name(),
        "price": product.price(),
        "category": product.category().as_str(),
    })
}
