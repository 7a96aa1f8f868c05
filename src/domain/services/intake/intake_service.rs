//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name                    | Description                                       | Key Methods      |
// |-------------------------|---------------------------------------------------|------------------|
// | OrderIntakeServiceImpl  | Validates, prices and confirms incoming orders    | place_order      |
//--------------------------------------------------------------------------------------------------

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::models::types::OrderConfirmation;

use super::{
    validation::validate, FieldError, OrderIdGenerator, OrderIntakeService, UuidOrderIdGenerator,
    ValidationError,
};

/// Order intake service.
///
/// Holds no state besides its identifier generator; every call is a pure
/// function of its input apart from the identifier it hands out.
pub struct OrderIntakeServiceImpl {
    id_generator: Box<dyn OrderIdGenerator>,
}

impl OrderIntakeServiceImpl {
    /// Creates a service issuing identifiers from `id_generator`.
    pub fn new(id_generator: Box<dyn OrderIdGenerator>) -> Self {
        Self { id_generator }
    }
}

impl Default for OrderIntakeServiceImpl {
    fn default() -> Self {
        Self::new(Box::new(UuidOrderIdGenerator))
    }
}

impl OrderIntakeService for OrderIntakeServiceImpl {
    fn place_order(&self, raw: &Value) -> Result<OrderConfirmation, ValidationError> {
        let request = validate(raw).inspect_err(|err| {
            warn!(errors = err.errors.len(), "Order rejected: {}", err);
        })?;

        let total_price = request.total_price().ok_or_else(|| {
            warn!(item = %request.item, "Order rejected: total price overflow");
            ValidationError::single(FieldError::constraint(
                "price",
                "quantity * price is out of range",
            ))
        })?;

        let order_id = self.id_generator.next_id();
        info!(
            order_id = %order_id,
            item = %request.item,
            quantity = request.quantity,
            total_price = %total_price,
            "Order accepted"
        );

        Ok(OrderConfirmation::new(order_id, request, total_price))
    }
}
