mod error;
mod routes;
mod state;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

fn main() {
    let token = std::env::var("EAN_SEARCH_API_TOKEN")
        .expect("set EAN_SEARCH_API_TOKEN to run the product API");

    // The SDK's HTTP client is blocking, so it must be built outside the
    // async runtime; route handlers only ever drive it from blocking tasks.
    eprintln!("Initializing barcode lookup SDK...");
    let sdk = barcode_lookup_sdk::BarcodeLookupSdk::new(token)
        .expect("Failed to initialize barcode lookup SDK");
    eprintln!("SDK ready.");

    let state = Arc::new(AppState {
        sdk: Arc::new(Mutex::new(sdk)),
        product_cache: Mutex::new(HashMap::new()),
    });

    let rt = tokio::runtime::Runtime::new().expect("Failed to start async runtime");
    rt.block_on(serve(state));
}

async fn serve(state: Arc<AppState>) {
    let app = Router::new()
        .route("/api/credits", get(routes::meta::get_credits))
        .route("/api/products/search", get(routes::products::search_products))
        .route("/api/products/{ean}", get(routes::products::get_product))
        .route(
            "/api/products/{ean}/image",
            get(routes::products::get_product_image),
        )
        .route("/api/verify/{ean}", get(routes::verify::verify_barcode))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = "0.0.0.0:3000";
    eprintln!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
