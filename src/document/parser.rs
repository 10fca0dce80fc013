//! JSON parsing into the internal value representation.
//!
//! This module converts standard JSON text into `JsonValue` trees. Parsing
//! goes through `serde_json` and then walks the resulting value, so all of
//! JSON's lexical edge cases are serde_json's problem; this module only
//! enforces jsonpick's shape rules:
//!
//! - the top-level value must be an object (the accessor wraps a mapping)
//! - arrays are not supported anywhere in the document
//!
//! # Example
//!
//! ```
//! use jsonpick::document::parser::parse_json;
//!
//! let json = r#"{"name": "Alice", "age": 30}"#;
//! let tree = parse_json(json).unwrap();
//! assert!(tree.is_object());
//! ```

use super::node::{JsonNumber, JsonValue};
use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde_json::Value as SerdeValue;

/// Parses a JSON string into a `JsonValue` tree.
///
/// # Errors
///
/// Returns an error if:
/// - The input is not valid JSON
/// - The top-level value is not an object
/// - The document contains an array at any depth
pub fn parse_json(source: &str) -> Result<JsonValue> {
    let value: SerdeValue = serde_json::from_str(source).context("Failed to parse JSON")?;

    if !value.is_object() {
        bail!("Top-level JSON value must be an object");
    }

    convert_value(&value)
}

/// Converts a `serde_json::Value` into a `JsonValue`.
///
/// Field order is preserved through `IndexMap` insertion order.
pub fn convert_value(value: &SerdeValue) -> Result<JsonValue> {
    match value {
        SerdeValue::Null => Ok(JsonValue::Null),
        SerdeValue::Bool(b) => Ok(JsonValue::Boolean(*b)),
        SerdeValue::Number(n) => Ok(JsonValue::Number(convert_number(n))),
        SerdeValue::String(s) => Ok(JsonValue::String(s.clone())),
        SerdeValue::Object(entries) => {
            let mut fields = IndexMap::with_capacity(entries.len());
            for (name, child) in entries {
                fields.insert(name.clone(), convert_value(child)?);
            }
            Ok(JsonValue::Object(fields))
        }
        SerdeValue::Array(_) => {
            bail!("Arrays are not supported: every nested value must be an object or a scalar")
        }
    }
}

/// Integers that fit i64 stay integers; everything else becomes a float.
fn convert_number(n: &serde_json::Number) -> JsonNumber {
    if let Some(i) = n.as_i64() {
        JsonNumber::Integer(i)
    } else {
        JsonNumber::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}
