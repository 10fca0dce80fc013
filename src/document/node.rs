//! JSON value representation for read-only traversal.
//!
//! This module provides the core data structure for representing JSON
//! documents in jsonpick. A value is either a mapping from field names to
//! child values, or a terminal scalar (string, number, boolean, null).
//! Traversal logic switches on this tag; there is no separate runtime type
//! inspection anywhere else in the crate.
//!
//! Arrays are deliberately absent: jsonpick addresses values by dotted
//! field paths, and every intermediate node on such a path is a mapping.
//! Documents containing arrays are rejected at parse time.
//!
//! # Example
//!
//! ```
//! use jsonpick::document::node::{JsonNumber, JsonValue};
//! use indexmap::IndexMap;
//!
//! let mut server = IndexMap::new();
//! server.insert("port".to_string(), JsonValue::Number(JsonNumber::Integer(4000)));
//! server.insert("alias".to_string(), JsonValue::String("default".to_string()));
//! let tree = JsonValue::Object(server);
//!
//! assert!(tree.is_object());
//! assert_eq!(format!("{}", tree), r#"{"port": 4000, "alias": "default"}"#);
//! ```

use indexmap::IndexMap;

/// Represents JSON numbers (integer or float)
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNumber {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonNumber::Integer(i) => write!(f, "{}", i),
            JsonNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl JsonNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            JsonNumber::Integer(i) => *i as f64,
            JsonNumber::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, JsonNumber::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, JsonNumber::Float(_))
    }
}

/// A JSON value: a mapping node or a terminal scalar.
///
/// Mappings use `IndexMap` so a document renders back in declaration order.
/// Field names are unique; a field name must not contain a `.`, since the
/// dot is the path delimiter and a literal dot inside a key cannot be told
/// apart from a separator.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// A mapping from field names to child values
    Object(IndexMap<String, JsonValue>),
    /// A JSON string
    String(String),
    /// A JSON number (integer or float)
    Number(JsonNumber),
    /// A JSON boolean
    Boolean(bool),
    /// A JSON null value
    Null,
}

impl JsonValue {
    /// Returns true if this value is a mapping node.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonpick::document::node::{JsonNumber, JsonValue};
    /// use indexmap::IndexMap;
    ///
    /// let obj = JsonValue::Object(IndexMap::new());
    /// assert!(obj.is_object());
    ///
    /// let num = JsonValue::Number(JsonNumber::Integer(42));
    /// assert!(!num.is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns true if this value is a terminal (non-mapping) value.
    pub fn is_terminal(&self) -> bool {
        !self.is_object()
    }

    /// Returns the field table if this value is a mapping node.
    pub fn as_object(&self) -> Option<&IndexMap<String, JsonValue>> {
        match self {
            JsonValue::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

impl std::fmt::Display for JsonValue {
    /// Renders the value as single-line JSON-style text.
    ///
    /// The output is meant for diagnostics and terminal display, not for
    /// round-tripping: string contents are not escaped.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonValue::Object(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", name, value)?;
                }
                write!(f, "}}")
            }
            JsonValue::String(s) => write!(f, "\"{}\"", s),
            JsonValue::Number(n) => write!(f, "{}", n),
            JsonValue::Boolean(b) => write!(f, "{}", b),
            JsonValue::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_object() {
        let obj = JsonValue::Object(IndexMap::new());
        assert!(obj.is_object());
        assert!(!obj.is_terminal());

        let s = JsonValue::String("hello".to_string());
        assert!(!s.is_object());
        assert!(s.is_terminal());
    }

    #[test]
    fn test_as_object() {
        let mut fields = IndexMap::new();
        fields.insert("key".to_string(), JsonValue::Null);
        let obj = JsonValue::Object(fields);

        assert_eq!(obj.as_object().unwrap().len(), 1);
        assert!(JsonValue::Boolean(true).as_object().is_none());
    }

    #[test]
    fn test_number_display() {
        let int = JsonNumber::Integer(42);
        assert_eq!(format!("{}", int), "42");

        let float = JsonNumber::Float(42.5);
        assert_eq!(format!("{}", float), "42.5");
    }

    #[test]
    fn test_number_type_checks() {
        let int = JsonNumber::Integer(42);
        assert!(int.is_integer());
        assert!(!int.is_float());

        let float = JsonNumber::Float(42.0);
        assert!(float.is_float());
        assert!(!float.is_integer());
    }

    #[test]
    fn test_display_nested_object() {
        let mut inner = IndexMap::new();
        inner.insert(
            "port".to_string(),
            JsonValue::Number(JsonNumber::Integer(80)),
        );

        let mut outer = IndexMap::new();
        outer.insert("host".to_string(), JsonValue::Object(inner));
        outer.insert("up".to_string(), JsonValue::Boolean(true));
        outer.insert("note".to_string(), JsonValue::Null);

        assert_eq!(
            format!("{}", JsonValue::Object(outer)),
            r#"{"host": {"port": 80}, "up": true, "note": null}"#
        );
    }
}
