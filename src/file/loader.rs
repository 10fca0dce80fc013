//! JSON file loading functionality.
//!
//! This module provides functions to load JSON documents from files or
//! stdin, parsing them into `JsonValue` trees ready for path access.
//! Gzipped input is handled transparently: files by extension, stdin by
//! the gzip magic bytes.

use crate::document::node::JsonValue;
use crate::document::parser::parse_json;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a JSON file from the filesystem.
///
/// # Arguments
///
/// * `path` - The path to the JSON file to load
///
/// # Examples
///
/// ```no_run
/// use jsonpick::file::loader::load_json_file;
///
/// let tree = load_json_file("config.json").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read (doesn't exist, permission denied, etc.)
/// - The file contents are not valid JSON
/// - The document's top-level value is not an object, or it contains arrays
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<JsonValue> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref).context("Failed to read file")?
    };

    parse_json(&content).context("Failed to parse JSON")
}

/// Loads and parses JSON from standard input.
///
/// Reads stdin until EOF. Useful for piping a document in:
/// `cat config.json | jsonpick get server.port`.
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - The input is not valid UTF-8 (after gzip decompression, if any)
/// - The contents are not a valid JSON object document
pub fn load_json_from_stdin() -> Result<JsonValue> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    // Check for gzip magic bytes (0x1f 0x8b)
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    parse_json(&content).context("Failed to parse JSON from stdin")
}

/// Reads and decompresses a gzipped file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not valid gzip format (corrupted)
/// - The decompressed content is not valid UTF-8
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped stdin")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{"name": "Alice", "age": 30}"#)
            .unwrap();

        let tree = load_json_file(temp_file.path()).unwrap();
        assert_eq!(tree.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_load_json_file_missing() {
        let result = load_json_file("/nonexistent/file.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_json_file_invalid_json() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{not json}").unwrap();

        let result = load_json_file(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_json_file_rejects_array_document() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(br#"{"items": [1, 2]}"#).unwrap();

        let result = load_json_file(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_read_gzipped_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;
        use tempfile::NamedTempFile;

        let json_content = r#"{"test": "value"}"#;
        let temp_file = NamedTempFile::new().unwrap();
        let gz_path = temp_file.path().with_extension("json.gz");

        let file = fs::File::create(&gz_path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(json_content.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let decompressed = read_gzipped_file(&gz_path).unwrap();
        assert_eq!(decompressed, json_content);
    }

    #[test]
    fn test_read_gzipped_file_corrupted() {
        use tempfile::NamedTempFile;

        let temp_file = NamedTempFile::new().unwrap();
        let gz_path = temp_file.path().with_extension("json.gz");
        fs::write(&gz_path, b"not gzip data").unwrap();

        let result = read_gzipped_file(&gz_path);
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("decompress") || err_msg.contains("corrupted"));
    }

    #[test]
    fn test_load_gzipped_json_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;
        use tempfile::NamedTempFile;

        let json_content = r#"{"name": "Alice", "age": 30}"#;
        let temp_file = NamedTempFile::new().unwrap();
        let gz_path = temp_file.path().with_extension("json.gz");

        let file = fs::File::create(&gz_path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(json_content.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let tree = load_json_file(&gz_path).unwrap();
        assert_eq!(tree.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_decompress_gzip_bytes() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(br#"{"a": 1}"#).unwrap();
        let compressed = encoder.finish().unwrap();

        let content = decompress_gzip_bytes(&compressed).unwrap();
        assert_eq!(content, r#"{"a": 1}"#);
    }
}
