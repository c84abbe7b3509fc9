//! Forgiving field decoders for the optional metadata in a JSON report.
//!
//! A wrong-typed optional field is logged and dropped; it never rejects the
//! report. Numeric strings become numbers and integral floats become integers.

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn raw<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.filter(|v| !v.is_null()))
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// Number, or a string holding one.
pub(crate) fn opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(raw(deserializer)?.and_then(|value| {
        let parsed = value_to_f64(&value);
        if parsed.is_none() {
            warn!("Ignoring non-numeric metadata value {value}");
        }
        parsed
    }))
}

/// Integer, integral float, or a string holding either.
pub(crate) fn opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(raw(deserializer)?.and_then(|value| {
        let parsed = match &value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
        .or_else(|| {
            value_to_f64(&value)
                .filter(|v| v.fract() == 0.0 && *v >= i64::MIN as f64 && *v <= i64::MAX as f64)
                .map(|v| v as i64)
        });
        if parsed.is_none() {
            warn!("Ignoring non-integer metadata value {value}");
        }
        parsed
    }))
}

/// Boolean, or the strings `"true"` / `"false"`.
pub(crate) fn opt_bool<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    Ok(raw(deserializer)?.and_then(|value| {
        let parsed = match &value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.trim().parse::<bool>().ok(),
            _ => None,
        };
        if parsed.is_none() {
            warn!("Ignoring non-boolean metadata value {value}");
        }
        parsed
    }))
}

/// String; numbers and booleans keep their JSON text.
pub(crate) fn opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(raw(deserializer)?.and_then(|value| match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            warn!("Ignoring non-text metadata value {other}");
            None
        }
    }))
}

/// A nested metadata object such as `browserInfo`. Anything but an object is
/// logged and dropped.
pub(crate) fn opt_group<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(raw(deserializer)?.and_then(|value| match value {
        Value::Object(_) => match serde_json::from_value(value) {
            Ok(group) => Some(group),
            Err(e) => {
                warn!("Ignoring unreadable metadata group: {e}");
                None
            }
        },
        other => {
            warn!("Ignoring metadata group: expected an object, got {other}");
            None
        }
    }))
}
