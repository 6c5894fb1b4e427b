//! HTTP API application wiring (Axum router + catalog wiring).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use storefront_catalog::Catalog;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The catalog is constructed by the caller and injected here; handlers read
/// it through an `Extension<Arc<Catalog>>` and there is no other state.
pub fn build_app(catalog: Catalog) -> Router {
    let catalog = Arc::new(catalog);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(catalog))
        .layer(ServiceBuilder::new())
}
