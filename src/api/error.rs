//--------------------------------------------------------------------------------------------------
// ENUMS
//--------------------------------------------------------------------------------------------------
// | Name            | Description                                      | Key Methods         |
// |-----------------|--------------------------------------------------|---------------------|
// | ApiError        | Error types for the API                          | from, status        |
//--------------------------------------------------------------------------------------------------

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::services::intake::{FieldError, ValidationError};

/// Type alias for Result with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// API-specific error types
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// One or more request fields failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The request body could not be parsed at all
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// No route matches the request
    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn details(&self) -> &[FieldError] {
        match self {
            Self::Validation(err) => &err.errors,
            _ => &[],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "code": status.as_u16(),
                "details": self.details(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    #[test]
    fn test_status_codes() {
        let validation = ApiError::from(ValidationError::single(FieldError::missing("item")));
        assert_eq!(validation.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            ApiError::MalformedRequest("bad".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validation_error_body_lists_fields() {
        let err = ApiError::from(ValidationError::new(vec![
            FieldError::missing("item"),
            FieldError::constraint("quantity", "quantity must be at least 1, got -5"),
        ]));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], 422);
        let details = body["error"]["details"].as_array().unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0]["field"], "item");
        assert_eq!(details[0]["kind"], "missing");
        assert_eq!(details[1]["field"], "quantity");
        assert_eq!(details[1]["kind"], "constraint");
    }

    #[tokio::test]
    async fn test_malformed_request_has_empty_details() {
        let response = ApiError::MalformedRequest("expected value".into()).into_response();
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["message"], "Malformed request: expected value");
        assert_eq!(body["error"]["details"], serde_json::json!([]));
    }
}
