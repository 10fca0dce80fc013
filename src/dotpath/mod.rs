//! Dotted-path resolution over JSON trees.
//!
//! This module is the core of jsonpick: a read-only accessor that resolves
//! paths like `localhost.dict.bar` against a parsed document and enumerates
//! every terminal value with its fully-qualified path.
//!
//! # Supported operations
//!
//! - [`Accessor::get`] - resolve a dotted path to the value at that location
//! - [`Accessor::get_with`] - the same, with a caller-chosen failure mode
//! - [`Accessor::child`] / [`Accessor::value`] - chained single-field access
//! - [`Accessor::leaves`] / [`Accessor::leaf_paths`] - enumerate terminals
//!
//! # Examples
//!
//! ```
//! use jsonpick::document::parser::parse_json;
//! use jsonpick::dotpath::{Accessor, FailureMode};
//!
//! let tree = parse_json(r#"{"host": {"port": 80}}"#).unwrap();
//! let accessor = Accessor::new(&tree);
//!
//! // Strict resolution: failures are errors
//! assert!(accessor.get("host.port").is_ok());
//!
//! // Tolerant resolution: failures are logged and become None
//! assert_eq!(accessor.get_with("host.missing", FailureMode::Warn), Ok(None));
//! ```

pub mod accessor;
pub mod error;
pub mod failure;

pub use accessor::Accessor;
pub use error::AccessError;
pub use failure::FailureMode;
