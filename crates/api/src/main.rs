use storefront_catalog::Catalog;

#[tokio::main]
async fn main() {
    storefront_observability::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        tracing::debug!("BIND_ADDR not set; using default");
        "0.0.0.0:8080".to_string()
    });

    let catalog = Catalog::seed().expect("seed catalog violates catalog invariants");
    let app = storefront_api::app::build_app(catalog);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
