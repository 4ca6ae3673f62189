//! Request body validation.
//!
//! Explicit presence checks over the raw JSON body, returning a tagged
//! result instead of relying on missing-key panics or exceptions. No
//! coercion or range checking beyond JSON-type extraction.
//!
//! Create and update differ deliberately:
//! - create requires each field to be present with a usable JSON type
//!   (the empty string is a present value and passes);
//! - update additionally rejects empty `name`/`description` and `null`
//!   `price`/`qty`, while `0` and `0.0` remain valid values.

use serde_json::Value;
use thiserror::Error;

use crate::store::ProductInput;

/// Validation failure. Carries the first offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

/// Result type for validation
pub type ValidateResult = Result<ProductInput, ValidateError>;

/// Validate a create body: all four fields must be present with a type
/// the column can hold. Absent, `null`, or wrong-typed values are all
/// reported as missing.
pub fn validate_create(body: &Value) -> ValidateResult {
    Ok(ProductInput {
        name: required_string(body, "name")?,
        description: required_string(body, "description")?,
        price: required_number(body, "price")?,
        qty: required_integer(body, "qty")?,
    })
}

/// Validate an update body: falsy `name`/`description` (including the
/// empty string) count as missing; `price`/`qty` must be present and
/// non-null, but zero is a valid value.
pub fn validate_update(body: &Value) -> ValidateResult {
    let name = required_string(body, "name")?;
    if name.is_empty() {
        return Err(ValidateError::MissingField("name"));
    }
    let description = required_string(body, "description")?;
    if description.is_empty() {
        return Err(ValidateError::MissingField("description"));
    }

    Ok(ProductInput {
        name,
        description,
        price: required_number(body, "price")?,
        qty: required_integer(body, "qty")?,
    })
}

fn required_string(body: &Value, field: &'static str) -> Result<String, ValidateError> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ValidateError::MissingField(field))
}

fn required_number(body: &Value, field: &'static str) -> Result<f64, ValidateError> {
    body.get(field)
        .and_then(Value::as_f64)
        .ok_or(ValidateError::MissingField(field))
}

fn required_integer(body: &Value, field: &'static str) -> Result<i64, ValidateError> {
    body.get(field)
        .and_then(Value::as_i64)
        .ok_or(ValidateError::MissingField(field))
}
