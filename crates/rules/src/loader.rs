use std::path::Path;

use serde_json::Value;

use crate::error::StorageError;

/// A frontend for one on-disk rule format.
///
/// The storage layer does not assume a serialization: each loader
/// claims a set of file extensions and turns file content into opaque
/// JSON rule values. Parsing is deterministic -- the same bytes always
/// yield the same values.
pub trait RuleLoader: Send + Sync {
    /// File extensions (without the dot) this loader handles.
    fn extensions(&self) -> &[&str];

    /// Parse rule definitions from raw content.
    fn parse(&self, content: &str) -> Result<Vec<Value>, StorageError>;

    /// Parse rule definitions from a file on disk.
    fn parse_file(&self, path: &Path) -> Result<Vec<Value>, StorageError>;
}

/// A top-level array contributes one rule per element; any other
/// top-level value contributes a single rule.
fn into_items(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

fn read_file(path: &Path) -> Result<String, StorageError> {
    std::fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("cannot read {}: {e}", path.display())))
}

/// Loader for JSON rule files.
pub struct JsonLoader;

impl RuleLoader for JsonLoader {
    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse(&self, content: &str) -> Result<Vec<Value>, StorageError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| StorageError::Parse(format!("JSON parse error: {e}")))?;
        Ok(into_items(value))
    }

    fn parse_file(&self, path: &Path) -> Result<Vec<Value>, StorageError> {
        let content = read_file(path)?;
        let value: Value = serde_json::from_str(&content).map_err(|e| {
            StorageError::Parse(format!("JSON parse error in {}: {e}", path.display()))
        })?;
        Ok(into_items(value))
    }
}

/// Loader for YAML rule files.
///
/// Documents are deserialized straight into JSON values so the rest of
/// the pipeline stays format-agnostic.
pub struct YamlLoader;

impl RuleLoader for YamlLoader {
    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn parse(&self, content: &str) -> Result<Vec<Value>, StorageError> {
        let value: Value = serde_yaml_ng::from_str(content)
            .map_err(|e| StorageError::Parse(format!("YAML parse error: {e}")))?;
        Ok(into_items(value))
    }

    fn parse_file(&self, path: &Path) -> Result<Vec<Value>, StorageError> {
        let content = read_file(path)?;
        let value: Value = serde_yaml_ng::from_str(&content).map_err(|e| {
            StorageError::Parse(format!("YAML parse error in {}: {e}", path.display()))
        })?;
        Ok(into_items(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_array_yields_one_rule_per_element() {
        let items = JsonLoader
            .parse(r#"[{"id":"r1"},{"id":"r2"}]"#)
            .expect("should parse");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], "r1");
        assert_eq!(items[1]["id"], "r2");
    }

    #[test]
    fn json_object_yields_a_single_rule() {
        let items = JsonLoader.parse(r#"{"id":"r1"}"#).expect("should parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "r1");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = JsonLoader.parse("{not json").unwrap_err();
        assert!(matches!(err, StorageError::Parse(_)));
    }

    #[test]
    fn yaml_rules_become_json_values() {
        let items = YamlLoader
            .parse("- id: r1\n  conditions: []\n- id: r2\n")
            .expect("should parse");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], "r1");
        assert!(items[0]["conditions"].is_array());
    }

    #[test]
    fn loaders_claim_their_extensions() {
        assert_eq!(JsonLoader.extensions(), &["json"]);
        assert_eq!(YamlLoader.extensions(), &["yaml", "yml"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = JsonLoader
            .parse_file(Path::new("/nonexistent/rules.json"))
            .unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
