use axum::{routing::get, Router};

pub mod products;
pub mod system;

/// Router for all catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::welcome))
        .nest("/products", products::router())
}
