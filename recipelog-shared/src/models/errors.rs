//! Interpretation of error bodies returned by the API.
//!
//! The server answers failed requests in two shapes: a flat object with an
//! `error` or `message` string, or a validation map from field name to a list
//! of messages. The helpers here pull one human-readable line out of either.

use serde_json::Value;

/// Returns the `error` string of an error body, falling back to `message`.
///
/// Empty strings and non-string values are skipped.
#[must_use]
pub fn message_field(body: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Returns the first validation message of an error body.
///
/// For an object body this is the first field's value in server order, or the
/// first element when that value is a list. A bare string body is returned as
/// is.
#[must_use]
pub fn first_validation_error(body: &Value) -> Option<String> {
    match body {
        Value::Object(fields) => match fields.values().next()? {
            Value::Array(messages) => messages.first()?.as_str().map(str::to_string),
            Value::String(message) => Some(message.clone()),
            _ => None,
        },
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}
