//! Shared validation rules and lenient field decoders.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

pub fn digits_only(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(rule("digits_only", "Must contain digits only"))
    }
}

pub fn positive_amount(value: &BigDecimal) -> Result<(), ValidationError> {
    if *value > BigDecimal::from(0) {
        Ok(())
    } else {
        Err(rule("positive_amount", "Amount must be greater than zero"))
    }
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(rule("not_blank", "Must not be blank"))
    } else {
        Ok(())
    }
}

/// Identifiers that end up inside a URL path.
pub fn path_identifier(value: &str) -> Result<(), ValidationError> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(rule(
            "path_identifier",
            "Must be non-empty and contain only letters, digits, '_' or '-'",
        ))
    }
}

/// Accepts a JSON string, number or bool and keeps it as text.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Treats an explicit `null` like a missing field.
pub fn null_as_default<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de> + Default,
{
    Ok(Option::<V>::deserialize(deserializer)?.unwrap_or_default())
}
