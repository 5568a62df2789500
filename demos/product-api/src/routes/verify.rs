use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/verify/:ean
///
/// Check a barcode's check digit and report the issuing country of its
/// registration prefix.
pub async fn verify_barcode(
    State(state): State<Arc<AppState>>,
    Path(ean): Path<String>,
) -> Result<Json<Value>, AppError> {
    let ean_check = ean.clone();
    let valid = state.run(move |sdk| sdk.verify().checksum(&ean_check)).await?;

    let country = if valid {
        let ean_country = ean.clone();
        state
            .run(move |sdk| sdk.verify().issuing_country(&ean_country))
            .await?
    } else {
        None
    };

    Ok(Json(json!({
        "ean": ean,
        "valid": valid,
        "issuingCountry": country
    })))
}
