use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use barcode_lookup_sdk::BarcodeLookupSdk;
use serde_json::Value;

use crate::error::AppError;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The blocking barcode SDK instance. The SDK is single-threaded by
    /// design, so concurrent requests serialize on this mutex.
    pub sdk: Arc<Mutex<BarcodeLookupSdk>>,

    /// In-memory cache of resolved products, keyed by EAN. Avoids spending
    /// API credits on repeated lookups of the same barcode.
    pub product_cache: Mutex<HashMap<String, Value>>,
}

impl AppState {
    /// Run a blocking SDK operation on the blocking-task thread pool.
    pub async fn run<T, F>(&self, op: F) -> Result<T, AppError>
    where
        F: FnOnce(&BarcodeLookupSdk) -> barcode_lookup_sdk::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = Arc::clone(&self.sdk);
        tokio::task::spawn_blocking(move || {
            let sdk = sdk
                .lock()
                .map_err(|_| AppError::internal("SDK lock poisoned"))?;
            op(&sdk).map_err(AppError::from)
        })
        .await
        .map_err(|_| AppError::internal("Blocking task panicked"))?
    }
}
