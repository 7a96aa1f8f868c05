//--------------------------------------------------------------------------------------------------
// FUNCTIONS
//--------------------------------------------------------------------------------------------------
// | Name                  | Description                                   | Return Type            |
// |-----------------------|-----------------------------------------------|------------------------|
// | validate              | Checks every field of a raw order request     | Result<OrderRequest,..>|
// | validate_item         | item / item_id / item_name                    | Result<String, ..>     |
// | validate_quantity     | Integer, at least one                         | Result<i64, ..>        |
// | validate_price        | Number, not negative                          | Result<Decimal, ..>    |
//--------------------------------------------------------------------------------------------------

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};

use crate::domain::models::types::OrderRequest;

use super::{FieldError, ValidationError};

/// Keys accepted for the item, in priority order.
pub const ITEM_KEYS: [&str; 3] = ["item", "item_id", "item_name"];

/// Validates a raw request body.
///
/// All fields are checked independently so the returned error lists every
/// violation, not only the first one.
pub fn validate(raw: &Value) -> Result<OrderRequest, ValidationError> {
    let Some(body) = raw.as_object() else {
        return Err(ValidationError::single(FieldError::invalid_type(
            "body",
            "a JSON object",
        )));
    };

    let item = validate_item(body);
    let quantity = validate_quantity(body.get("quantity"));
    let unit_price = validate_price(body.get("price"));

    match (item, quantity, unit_price) {
        (Ok(item), Ok(quantity), Ok(unit_price)) => Ok(OrderRequest {
            item,
            quantity,
            unit_price,
        }),
        (item, quantity, unit_price) => {
            let errors = [item.err(), quantity.err(), unit_price.err()]
                .into_iter()
                .flatten()
                .collect();
            Err(ValidationError::new(errors))
        }
    }
}

fn validate_item(body: &Map<String, Value>) -> Result<String, FieldError> {
    // First non-null key wins; the error is reported under that key's name.
    let found = ITEM_KEYS
        .iter()
        .find_map(|key| body.get(*key).filter(|v| !v.is_null()).map(|v| (*key, v)));

    let Some((key, value)) = found else {
        return Err(FieldError::missing("item"));
    };

    let Value::String(text) = value else {
        return Err(FieldError::invalid_type(key, "a string"));
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldError::constraint(key, format!("{} must not be empty", key)));
    }

    Ok(trimmed.to_string())
}

fn validate_quantity(value: Option<&Value>) -> Result<i64, FieldError> {
    let number = match value {
        None | Some(Value::Null) => return Err(FieldError::missing("quantity")),
        Some(Value::Number(number)) => number,
        Some(_) => return Err(FieldError::invalid_type("quantity", "an integer")),
    };

    let quantity = number
        .as_i64()
        .ok_or_else(|| FieldError::invalid_type("quantity", "an integer"))?;

    if quantity < 1 {
        return Err(FieldError::constraint(
            "quantity",
            format!("quantity must be at least 1, got {}", quantity),
        ));
    }

    Ok(quantity)
}

fn validate_price(value: Option<&Value>) -> Result<Decimal, FieldError> {
    let number = match value {
        None | Some(Value::Null) => return Err(FieldError::missing("price")),
        Some(Value::Number(number)) => number,
        Some(_) => return Err(FieldError::invalid_type("price", "a number")),
    };

    // Sign is checked on the raw number so tiny negatives do not round to zero first.
    if number.as_f64().is_some_and(|f| f < 0.0) {
        return Err(FieldError::constraint(
            "price",
            format!("price must not be negative, got {}", number),
        ));
    }

    number_to_decimal(number)
        .ok_or_else(|| FieldError::constraint("price", "price is out of range"))
}

/// Largest scale a `Decimal` can hold.
const MAX_SCALE: u32 = 28;

/// Converts a JSON number through its shortest decimal text, so `1000.50`
/// becomes exactly `1000.5` instead of the nearest binary float.
///
/// Values with more than 28 decimal places are rounded half away from zero
/// to 28 places.
pub fn number_to_decimal(number: &Number) -> Option<Decimal> {
    if let Some(int) = number.as_i64() {
        return Some(Decimal::from(int));
    }
    if let Some(int) = number.as_u64() {
        return Some(Decimal::from(int));
    }

    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .or_else(|| round_to_max_scale(&text))
        .map(|d| d.normalize())
}

fn round_to_max_scale(text: &str) -> Option<Decimal> {
    let (base, exponent) = text.split_once(|c| c == 'e' || c == 'E')?;
    let exponent: i64 = exponent.parse().ok()?;
    if exponent >= 0 {
        return None;
    }

    let base = Decimal::from_str(base).ok()?;
    let extra = i64::from(base.scale()) - exponent - i64::from(MAX_SCALE);
    if extra <= 0 {
        return None;
    }
    if extra > 38 {
        return Some(Decimal::ZERO);
    }

    let divisor = 10i128.pow(extra as u32);
    let mantissa = base.mantissa();
    let (quotient, remainder) = (mantissa / divisor, mantissa % divisor);
    let rounded = if remainder.abs() * 2 >= divisor {
        quotient + mantissa.signum()
    } else {
        quotient
    };

    Some(Decimal::from_i128_with_scale(rounded, MAX_SCALE))
}
