//! Read-only dotted-path access into a JSON tree.

use std::collections::VecDeque;
use std::fmt;

use super::error::AccessError;
use super::failure::{dispatch, FailureMode};
use crate::document::node::JsonValue;

/// A read-only view over one node of a JSON tree.
///
/// The accessor borrows the node it wraps; it never copies or mutates the
/// underlying tree, and the borrow checker extends that guarantee to every
/// value handed out by its methods. Wrapping is cheap, so accessors can be
/// created freely for subtrees.
///
/// # Example
///
/// ```
/// use jsonpick::document::parser::parse_json;
/// use jsonpick::dotpath::Accessor;
/// use jsonpick::document::node::{JsonNumber, JsonValue};
///
/// let tree = parse_json(r#"{"server": {"port": 8080}}"#).unwrap();
/// let accessor = Accessor::new(&tree);
///
/// let port = accessor.get("server.port").unwrap();
/// assert_eq!(port, &JsonValue::Number(JsonNumber::Integer(8080)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Accessor<'a> {
    node: &'a JsonValue,
}

impl<'a> Accessor<'a> {
    /// Wraps a node of a JSON tree.
    ///
    /// The node is usually the object produced by parsing a document, but
    /// any node works: `child` returns accessors over subtrees, including
    /// terminal ones.
    pub fn new(node: &'a JsonValue) -> Self {
        Accessor { node }
    }

    /// Returns the raw wrapped value, terminating a chain of `child` calls.
    pub fn value(&self) -> &'a JsonValue {
        self.node
    }

    /// Resolves a dotted path and returns the value at that location.
    ///
    /// The path is split on `.` and each field name descends one level.
    /// The returned value may itself be a mapping or a terminal; resolving
    /// a path without its final field name yields the parent node.
    ///
    /// # Errors
    ///
    /// - [`AccessError::MissingPath`] if `path` is empty
    /// - [`AccessError::InvalidPath`] if `path` contains an empty field
    ///   name (`a..b`, leading or trailing dot)
    /// - [`AccessError::NotAMapping`] if a field name remains but the
    ///   current value is a terminal
    /// - [`AccessError::KeyNotFound`] if a field name is absent from the
    ///   current mapping
    ///
    /// # Example
    ///
    /// ```
    /// use jsonpick::document::parser::parse_json;
    /// use jsonpick::dotpath::{AccessError, Accessor};
    ///
    /// let tree = parse_json(r#"{"a": {"b": 1}}"#).unwrap();
    /// let accessor = Accessor::new(&tree);
    ///
    /// assert!(accessor.get("a.b").is_ok());
    /// assert!(matches!(
    ///     accessor.get("a.c"),
    ///     Err(AccessError::KeyNotFound { .. })
    /// ));
    /// ```
    pub fn get(&self, path: &str) -> Result<&'a JsonValue, AccessError> {
        self.resolve(path)
    }

    /// Resolves a dotted path under an explicit failure mode.
    ///
    /// Under [`FailureMode::Raise`] this behaves like [`Accessor::get`],
    /// with success wrapped in `Some`. Under [`FailureMode::Warn`] a
    /// failure is logged as a warning and the call returns `Ok(None)`
    /// instead of an error, so the caller's control flow is never
    /// interrupted.
    pub fn get_with(
        &self,
        path: &str,
        mode: FailureMode,
    ) -> Result<Option<&'a JsonValue>, AccessError> {
        match self.resolve(path) {
            Ok(node) => Ok(Some(node)),
            Err(err) => dispatch(err, mode),
        }
    }

    fn resolve(&self, path: &str) -> Result<&'a JsonValue, AccessError> {
        if path.is_empty() {
            return Err(AccessError::MissingPath);
        }

        let mut current = self.node;
        for field in path.split('.') {
            if field.is_empty() {
                return Err(AccessError::InvalidPath {
                    path: path.to_string(),
                });
            }
            match current {
                JsonValue::Object(fields) => match fields.get(field) {
                    Some(child) => current = child,
                    None => {
                        return Err(AccessError::KeyNotFound {
                            path: path.to_string(),
                            field: field.to_string(),
                        })
                    }
                },
                _ => {
                    return Err(AccessError::NotAMapping {
                        path: path.to_string(),
                        field: field.to_string(),
                    })
                }
            }
        }

        Ok(current)
    }

    /// Looks up a single field and wraps the child in a new accessor.
    ///
    /// This is the chained form of access: each call descends one level
    /// and returns another `Accessor`, so lookups compose with `?`. Use
    /// [`Accessor::value`] to unwrap the final node. Failures always
    /// propagate; there is no tolerant variant of chained access.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonpick::document::parser::parse_json;
    /// use jsonpick::document::node::JsonValue;
    /// use jsonpick::dotpath::Accessor;
    ///
    /// let tree = parse_json(r#"{"host": {"alias": "server"}}"#).unwrap();
    /// let accessor = Accessor::new(&tree);
    ///
    /// let alias = accessor.child("host").unwrap().child("alias").unwrap();
    /// assert_eq!(
    ///     alias.value(),
    ///     &JsonValue::String("server".to_string())
    /// );
    /// ```
    pub fn child(&self, name: &str) -> Result<Accessor<'a>, AccessError> {
        match self.node {
            JsonValue::Object(fields) => match fields.get(name) {
                Some(node) => Ok(Accessor::new(node)),
                None => Err(AccessError::KeyNotFound {
                    path: name.to_string(),
                    field: name.to_string(),
                }),
            },
            _ => Err(AccessError::NotAMapping {
                path: name.to_string(),
                field: name.to_string(),
            }),
        }
    }

    /// Collects every terminal value with its fully-qualified dotted path.
    ///
    /// The tree is walked breadth-first starting from the wrapped
    /// mapping's own entries: dequeuing a mapping enqueues its entries
    /// with the path prefix extended by `.<field>`, and dequeuing a
    /// terminal appends `(path, value)` to the result. Every terminal
    /// appears exactly once, labeled with the path `get` would need to
    /// resolve it back.
    ///
    /// The output order is a byproduct of traversal order and is not part
    /// of the contract; treat the result as a set.
    ///
    /// On an accessor wrapping a terminal the result is empty.
    pub fn leaves(&self) -> Vec<(String, &'a JsonValue)> {
        let mut queue: VecDeque<(String, &'a JsonValue)> = match self.node {
            JsonValue::Object(fields) => {
                fields.iter().map(|(name, node)| (name.clone(), node)).collect()
            }
            _ => VecDeque::new(),
        };

        let mut result = Vec::new();
        while let Some((path, node)) = queue.pop_front() {
            match node {
                JsonValue::Object(fields) => {
                    for (name, child) in fields {
                        queue.push_back((format!("{}.{}", path, name), child));
                    }
                }
                _ => result.push((path, node)),
            }
        }

        result
    }

    /// Like [`Accessor::leaves`], but collects only the dotted paths.
    pub fn leaf_paths(&self) -> Vec<String> {
        self.leaves().into_iter().map(|(path, _)| path).collect()
    }
}

impl fmt::Display for Accessor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.node)
    }
}
