//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// This module defines the core data types of the order intake service: the validated order
// request, the identifier handed out for every accepted order and the confirmation returned
// to the caller.
//
// | Section            | Description                                                      |
// |--------------------|------------------------------------------------------------------|
// | STRUCTS            | OrderId, OrderRequest, OrderConfirmation.                        |
// | TESTS              | Contains unit tests for the defined types.                       |
//--------------------------------------------------------------------------------------------------

//--------------------------------------------------------------------------------------------------
//  STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name              | Description                                    | Key Methods     |
// |-------------------|------------------------------------------------|-----------------|
// | OrderId           | Opaque identifier of an accepted order         | as_str          |
// | OrderRequest      | Order request that passed validation           | total_price     |
// | OrderConfirmation | Result of a successfully placed order          | new             |
//--------------------------------------------------------------------------------------------------
use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to an accepted order.
///
/// Only guaranteed to be non-empty and unique within the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An order request whose fields have all been checked.
///
/// Instances are only produced by the validation step, so `item` is non-empty,
/// `quantity` is at least one and `unit_price` is never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Item identifier or name, trimmed.
    pub item: String,
    /// Number of units ordered.
    pub quantity: i64,
    /// Price of a single unit.
    pub unit_price: Decimal,
}

impl OrderRequest {
    /// Computes `quantity * unit_price`.
    ///
    /// Returns `None` when the product does not fit in a `Decimal`.
    pub fn total_price(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_price)
    }
}

/// Confirmation returned for every accepted order. Nothing is retained after it is returned.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// Identifier generated for this order
    pub order_id: OrderId,
    /// Item the order was placed for
    pub item: String,
    /// Number of units ordered
    pub quantity: i64,
    /// Price of a single unit
    pub unit_price: Decimal,
    /// quantity * unit_price
    pub total_price: Decimal,
    /// When the order was accepted
    pub created_at: DateTime<Utc>,
}

impl OrderConfirmation {
    pub fn new(order_id: OrderId, request: OrderRequest, total_price: Decimal) -> Self {
        Self {
            order_id,
            item: request.item,
            quantity: request.quantity,
            unit_price: request.unit_price,
            total_price,
            created_at: Utc::now(),
        }
    }
}
