use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/credits
///
/// Returns the remaining API credits as last reported by the lookup service,
/// or `null` before the first successful upstream call.
pub async fn get_credits(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let credits = {
        let sdk = state
            .sdk
            .lock()
            .map_err(|_| AppError::internal("SDK lock poisoned"))?;
        sdk.credits_remaining()
    };

    Ok(Json(json!({ "creditsRemaining": credits })))
}
