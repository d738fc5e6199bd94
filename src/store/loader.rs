//! Record loader - JSON file loading and parsing
//!
//! Files hold a JSON array of flat objects, optionally wrapped in a
//! JavaScript assignment (`var vessels = [...];`).

use super::record::Record;
use crate::error::{Result, StoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Loads record lists from JSON files
pub struct RecordLoader;

impl RecordLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load records from a JSON (or JS-wrapped JSON) file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Record>> {
        let path = path.as_ref();
        log::info!("Loading file: {}", path.display());

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::error!("File not found: {}", path.display());
                return Err(StoreError::not_found(path));
            }
            Err(e) => return Err(e.into()),
        };

        let records = Self::parse_str(&content).map_err(|e| {
            log::error!("Invalid JSON format in {}: {}", path.display(), e);
            StoreError::malformed(path, e)
        })?;

        log::info!("Successfully loaded {} records", records.len());
        Ok(records)
    }

    /// Parse records from file content, stripping any JS wrapper first
    pub fn parse_str(content: &str) -> serde_json::Result<Vec<Record>> {
        serde_json::from_str(Self::strip_js_wrapper(content))
    }

    /// Remove a leading `var <name> =` and a trailing `;` if present
    pub fn strip_js_wrapper(content: &str) -> &str {
        let mut content = content.trim();

        if content.starts_with("var ") {
            if let Some((_, rest)) = content.split_once('=') {
                content = rest;
            }
        }

        content.trim().strip_suffix(';').unwrap_or(content).trim()
    }
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_strip_js_wrapper() {
        let content = r#"var vessels = [{"test": "data"}];"#;
        assert_eq!(RecordLoader::strip_js_wrapper(content), r#"[{"test": "data"}]"#);
    }

    #[test]
    fn test_strip_js_wrapper_other_name_and_whitespace() {
        let content = "\n  var data=[1, 2] ;\n";
        assert_eq!(RecordLoader::strip_js_wrapper(content), "[1, 2]");
    }

    #[test]
    fn test_strip_js_wrapper_no_var() {
        let content = r#"[{"test": "data"}]"#;
        assert_eq!(RecordLoader::strip_js_wrapper(content), content);

        let content = r#"[{"test": "data"}];"#;
        assert_eq!(RecordLoader::strip_js_wrapper(content), r#"[{"test": "data"}]"#);
    }

    #[test]
    fn test_parse_str() {
        let records = RecordLoader::parse_str(
            r#"var vessels = [{"Z01_CURRENT_NAME": "Vessel 1", "Z13_STATUS_CODE": 4}];"#,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Z13_STATUS_CODE"), Some(&json!(4)));
    }

    #[test]
    fn test_parse_str_rejects_non_array_and_non_objects() {
        assert!(RecordLoader::parse_str("Invalid JSON content").is_err());
        assert!(RecordLoader::parse_str(r#"{"a": 1}"#).is_err());
        assert!(RecordLoader::parse_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"a": 1}}, {{"a": 2}}]"#).unwrap();

        let records = RecordLoader::new().load_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("non_existent.json");

        let err = RecordLoader::new().load_file(&missing).unwrap_err();
        match err {
            StoreError::NotFound { path } => assert_eq!(path, missing),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Invalid JSON content").unwrap();

        let err = RecordLoader::new().load_file(file.path()).unwrap_err();
        match err {
            StoreError::MalformedInput { path, .. } => assert_eq!(path, file.path()),
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }
}
