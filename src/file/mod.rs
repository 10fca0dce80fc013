//! File I/O operations for JSON documents.
//!
//! This module provides functionality to load JSON documents from disk or
//! stdin. jsonpick never writes documents back; there is no save path.

pub mod loader;
