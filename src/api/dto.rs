//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name                 | Description                               | Key Methods         |
// |----------------------|-------------------------------------------|---------------------|
// | HealthResponse       | Liveness probe body                       | ok                  |
// | OrderResponse        | Confirmation of an accepted order         | from                |
//--------------------------------------------------------------------------------------------------

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::models::types::OrderConfirmation;

/// Response for the liveness probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Response for an accepted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Identifier generated for the order
    pub order_id: String,
    /// Item the order was placed for
    pub item: String,
    /// Number of units ordered
    pub quantity: i64,
    /// Price of a single unit
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// quantity * unit_price
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    /// Acceptance timestamp
    pub created_at: DateTime<Utc>,
}

impl From<OrderConfirmation> for OrderResponse {
    fn from(confirmation: OrderConfirmation) -> Self {
        Self {
            order_id: confirmation.order_id.to_string(),
            item: confirmation.item,
            quantity: confirmation.quantity,
            unit_price: confirmation.unit_price,
            total_price: confirmation.total_price,
            created_at: confirmation.created_at,
        }
    }
}
