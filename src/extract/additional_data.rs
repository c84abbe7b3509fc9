//! Parsing of the free-form `additionalData` / `customFields` inputs.
//!
//! Failures here never reject a request: the field is logged and stored as null.

use log::warn;
use serde_json::Value;

use crate::models::Metadata;

/// Parses an `additionalData` string from the query form.
///
/// Strings wrapped in `{` and `}` are read as a JSON object. Anything else is
/// read as `key:value,key:value` shorthand: pairs split on `,`, key and value
/// split on the first `:`, both trimmed. Pairs with an empty key or value are
/// skipped. An empty result is `None`, never an empty map.
pub fn parse_additional_data(raw: &str) -> Option<Metadata> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.starts_with('{') && raw.ends_with('}') {
        return match serde_json::from_str::<Metadata>(raw) {
            Ok(map) if map.is_empty() => None,
            Ok(map) => Some(map),
            Err(e) => {
                warn!("Could not parse additionalData as JSON ({e}): {raw}");
                None
            }
        };
    }

    let map: Metadata = raw
        .split(',')
        .filter_map(|pair| {
            let (key, value) = pair.split_once(':')?;
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                return None;
            }
            Some((key.to_string(), Value::String(value.to_string())))
        })
        .collect();

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// Reads a free-form mapping from a JSON body field.
///
/// Objects are kept as-is (empty objects become `None`); strings go through
/// [`parse_additional_data`]; `null` is `None`. Any other JSON type is logged
/// and dropped.
pub fn metadata_from_json(field: &str, value: Option<Value>) -> Option<Metadata> {
    match value? {
        Value::Null => None,
        Value::Object(map) if map.is_empty() => None,
        Value::Object(map) => Some(map),
        Value::String(s) => parse_additional_data(&s),
        other => {
            warn!("Ignoring {field}: expected an object, got {other}");
            None
        }
    }
}
