use axum::{http::StatusCode, response::IntoResponse, Json};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `GET /` welcome payload listing the documented routes.
pub async fn welcome() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to the Products API",
        "endpoints": {
            "GET /": "This welcome message",
            "GET /products": "List all products (optional ?category=electronics filter)",
            "GET /products/{id}": "Get a specific product by ID",
        }
    }))
}
