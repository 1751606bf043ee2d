//! Body normalization applied before a payload is stored in an envelope

use heck::ToLowerCamelCase;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::HandlerError;

/// Serialize `body` to JSON and [`normalize`] it.
///
/// Fails with [`HandlerError::Serialization`] when the payload has no JSON
/// representation, e.g. a map keyed by something other than strings.
pub fn to_normalized_value<T: Serialize + ?Sized>(body: &T) -> Result<Value, HandlerError> {
    let value = serde_json::to_value(body)?;
    Ok(normalize(value))
}

/// Rename object keys to lower camel case and drop object entries whose
/// value is `null`.
///
/// Recurses through nested objects and through objects held in arrays.
/// `null` array elements are positional rather than fields, so they stay.
/// When two keys collapse to the same camel case name the one sorting last
/// wins.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(normalize_object(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        other => other,
    }
}

fn normalize_object(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (camel_case_key(&key), normalize(value)))
        .collect()
}

/// Render a field name in lower camel case (`snake_case_field` ->
/// `snakeCaseField`, `URLValue` -> `urlValue`).
pub fn camel_case_key(key: &str) -> String {
    key.to_lower_camel_case()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_camel_case_key() {
        assert_eq!(camel_case_key("snake_case_field"), "snakeCaseField");
        assert_eq!(camel_case_key("PascalCase"), "pascalCase");
        assert_eq!(camel_case_key("kebab-case"), "kebabCase");
        assert_eq!(camel_case_key("message"), "message");
        assert_eq!(camel_case_key("alreadyCamel"), "alreadyCamel");
    }

    #[test]
    fn test_nulls_dropped_recursively() {
        let value = normalize(json!({
            "kept": 1,
            "dropped": null,
            "nested": { "inner_dropped": null, "inner_kept": "x" }
        }));

        assert_eq!(value, json!({
            "kept": 1,
            "nested": { "innerKept": "x" }
        }));
    }

    #[test]
    fn test_array_elements() {
        let value = normalize(json!([{ "first_name": "a", "last_name": null }, null, 3]));
        assert_eq!(value, json!([{ "firstName": "a" }, null, 3]));
    }

    #[test]
    fn test_non_string_map_keys_fail() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], "value");

        let err = to_normalized_value(&map).unwrap_err();
        assert!(matches!(err, HandlerError::Serialization(_)));
    }
}
