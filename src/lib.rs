//! JSONPick - read values out of JSON documents by dotted path.
//!
//! A document is parsed into a tree of nested mappings and scalars, and a
//! [`dotpath::Accessor`] resolves dotted paths (`a.b.c`) against it, walks
//! chains of single fields, or enumerates every terminal value together
//! with the path that reaches it. The accessor is strictly read-only.

pub mod config;
pub mod document;
pub mod dotpath;
pub mod file;
