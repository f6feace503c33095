//! Reading the input trees and writing the completed namespace tree

use crate::error::OptdocError;
use crate::result::Result;
use crate::tree::{NamespaceTree, OptionsTree};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| OptdocError::io_error(path, e))?;
    serde_json::from_str(&content).map_err(|e| OptdocError::json_error(path, e))
}

pub fn load_namespace_tree(path: &Path) -> Result<NamespaceTree> {
    debug!("Loading namespace tree from {}", path.display());
    read_json(path)
}

/// Load a top-level option map and wrap it in an empty root
pub fn load_options_tree(path: &Path) -> Result<OptionsTree> {
    debug!("Loading options tree from {}", path.display());
    read_json(path)
}

/// Serialize `value` as JSON indented with tabs
pub fn to_json_string_tabbed<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write `value` to `path` as tab-indented JSON, creating parent directories
pub fn write_json_tabbed<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let output = to_json_string_tabbed(value).map_err(|e| OptdocError::json_error(path, e))?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| OptdocError::io_error(parent, e))?;
    }
    fs::write(path, output).map_err(|e| OptdocError::io_error(path, e))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_tab_indentation() {
        let text = to_json_string_tabbed(&json!({"a": [1]})).unwrap();
        assert_eq!(text, "{\n\t\"a\": [\n\t\t1\n\t]\n}");
    }

    #[test]
    fn test_write_then_load_options_tree() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/tree.json");
        let value = json!({"chart": {"doclet": {}, "meta": {}, "children": {}}});

        write_json_tabbed(&path, &value).unwrap();
        let tree = load_options_tree(&path).unwrap();
        assert!(tree.get("chart").is_some());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let error = load_namespace_tree(Path::new("does-not-exist.json")).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tree.json");
        fs::write(&path, "{ not json").unwrap();
        let error = load_options_tree(&path).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Json);
        assert!(error.to_string().contains("tree.json"));
    }
}
