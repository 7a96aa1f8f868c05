//--------------------------------------------------------------------------------------------------
// FUNCTIONS
//--------------------------------------------------------------------------------------------------
// | Name                  | Description                            | Return Type                |
// |-----------------------|----------------------------------------|----------------------------|
// | health                | Liveness probe for / and /health       | Json<HealthResponse>       |
// | create_order          | Validate, price and confirm an order   | ApiResult<Response>        |
// | not_found             | Fallback for unknown routes            | ApiError                   |
//--------------------------------------------------------------------------------------------------

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::debug;

use super::{ApiError, ApiResult, AppState, HealthResponse, OrderResponse};

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Create and price a new order
pub async fn create_order(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(raw) = payload.inspect_err(|rejection| {
        debug!("Rejected order body: {}", rejection.body_text());
    })?;

    let confirmation = state.intake.place_order(&raw)?;

    let response = OrderResponse::from(confirmation);
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Fallback for unknown routes, answered with the regular error body
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
