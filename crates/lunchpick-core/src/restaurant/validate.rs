//! Raw record validation.
//!
//! The remote store hands back loosely typed rows; this module normalizes
//! them into well-typed [`Restaurant`] values or rejects them. Rejected
//! rows are dropped from the working set rather than surfaced one by one.

use serde_json::{Map, Value};

use crate::error::{LunchError, Result};
use crate::restaurant::model::Restaurant;

/// Validates one raw record from the remote store.
///
/// Accepts the record only if `id`, `name`, `type` and `address` are
/// non-empty strings, `times_picked` is a non-negative integer (or numeric
/// text), and each of `reviews`, `cost` and `time` is absent, null, or a
/// string.
pub fn validate_record(raw: &Value) -> Result<Restaurant> {
    let fields = raw
        .as_object()
        .ok_or_else(|| LunchError::validation("record is not an object"))?;

    Ok(Restaurant {
        id: required_text(fields, "id")?,
        name: required_text(fields, "name")?,
        reviews: optional_text(fields, "reviews")?,
        cost: optional_text(fields, "cost")?,
        cuisine: required_text(fields, "type")?,
        address: required_text(fields, "address")?,
        time: optional_text(fields, "time")?,
        times_picked: times_picked(fields)?,
    })
}

/// Validates a whole fetched collection, silently dropping rejected rows.
///
/// The caller is expected to log the dropped count; downstream code only
/// ever sees valid records.
pub fn validate_collection(raws: &[Value]) -> Vec<Restaurant> {
    raws.iter()
        .filter_map(|raw| validate_record(raw).ok())
        .collect()
}

fn required_text(fields: &Map<String, Value>, key: &str) -> Result<String> {
    match fields.get(key) {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        Some(Value::String(_)) => Err(LunchError::validation(format!("field '{key}' is empty"))),
        Some(_) => Err(LunchError::validation(format!(
            "field '{key}' is not text"
        ))),
        None => Err(LunchError::validation(format!("field '{key}' is missing"))),
    }
}

fn optional_text(fields: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(LunchError::validation(format!(
            "field '{key}' is neither text nor null"
        ))),
    }
}

/// Coerces `times_picked` from a JSON number or numeric text to `u32`.
/// Negative values and fractional numbers are rejected, not truncated.
fn times_picked(fields: &Map<String, Value>) -> Result<u32> {
    let value = fields
        .get("times_picked")
        .ok_or_else(|| LunchError::validation("field 'times_picked' is missing"))?;

    let count = match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| LunchError::validation("'times_picked' is not a non-negative integer")),
        Value::String(text) => text
            .trim()
            .parse::<u64>()
            .map_err(|_| LunchError::validation("'times_picked' text is not numeric")),
        _ => Err(LunchError::validation("'times_picked' is not a number")),
    }?;

    u32::try_from(count)
        .map_err(|_| LunchError::validation("'times_picked' is out of counter range"))
}
