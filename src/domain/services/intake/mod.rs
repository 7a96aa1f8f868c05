//--------------------------------------------------------------------------------------------------
// TRAITS
//--------------------------------------------------------------------------------------------------
// | Name                | Description                                     | Key Methods       |
// |---------------------|-------------------------------------------------|-------------------|
// | OrderIntakeService  | Validates, prices and confirms orders           | place_order       |
//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name                | Description                                     | Key Methods       |
// |---------------------|-------------------------------------------------|-------------------|
// | FieldError          | Failure of a single request field               | missing, ...      |
// | ValidationError     | All field failures of one request               | new, field        |
//--------------------------------------------------------------------------------------------------
// ENUMS
//--------------------------------------------------------------------------------------------------
// | Name                | Description                                     |
// |---------------------|-------------------------------------------------|
// | FieldErrorKind      | Missing, InvalidType or Constraint              |
//--------------------------------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::models::types::OrderConfirmation;

pub mod intake_service;
pub mod order_id;
pub mod validation;

pub use self::intake_service::OrderIntakeServiceImpl;
pub use self::order_id::{OrderIdGenerator, SequentialOrderIdGenerator, UuidOrderIdGenerator};
pub use self::validation::validate;

/// Service accepting and pricing incoming orders.
///
/// Implementations are stateless apart from identifier generation and must be
/// safe to share between concurrently running request handlers.
pub trait OrderIntakeService: Send + Sync {
    /// Validates a raw order request, prices it and assigns it a fresh identifier.
    ///
    /// # Arguments
    /// * `raw` - The request body as received from the caller
    ///
    /// # Returns
    /// * `Ok(OrderConfirmation)` - If every field passed validation
    /// * `Err(ValidationError)` - Listing every offending field
    fn place_order(&self, raw: &Value) -> Result<OrderConfirmation, ValidationError>;
}

/// Category of a single field failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// The field is absent or null.
    Missing,
    /// The field has the wrong JSON type.
    InvalidType,
    /// The field has the right type but violates a constraint.
    Constraint,
}

/// Failure of a single request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: FieldErrorKind::Missing,
            message: format!("{} is required", field),
        }
    }

    pub fn invalid_type(field: &str, expected: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: FieldErrorKind::InvalidType,
            message: format!("{} must be {}", field, expected),
        }
    }

    pub fn constraint(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind: FieldErrorKind::Constraint,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Structured rejection of an order request. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", summary(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(error: FieldError) -> Self {
        Self { errors: vec![error] }
    }

    /// Returns the error reported for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
