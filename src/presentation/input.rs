//! Command inputs: files or stdin (`-`).

use std::io::{self, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::entities::{labels_to_tree, parse_label_json, parse_tree_json, TreeNode};
use crate::error::{LabelTreeError, LabelTreeResult};

/// Read `path`, or stdin when it is `-`. Returns the content and a name
/// for error messages.
pub fn read_source(path: &Path) -> LabelTreeResult<(String, String)> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok((content, "<stdin>".to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok((content, path.display().to_string()))
}

/// Load a label tree; `backend` selects the `{id, name, categories}` shape
pub fn load_tree(path: &Path, backend: bool) -> LabelTreeResult<Vec<TreeNode>> {
    let (content, source_name) = read_source(path)?;
    if backend {
        parse_label_json(&content, &source_name).map(labels_to_tree)
    } else {
        parse_tree_json(&content, &source_name)
    }
}

/// Load a selection printed by `select` (a TreeNode array)
pub fn load_selection(path: &Path) -> LabelTreeResult<Vec<TreeNode>> {
    let (content, source_name) = read_source(path)?;
    parse_tree_json(&content, &source_name)
}

/// Load any JSON document
pub fn load_json<T: DeserializeOwned>(path: &Path) -> LabelTreeResult<T> {
    let (content, source_name) = read_source(path)?;
    serde_json::from_str(&content).map_err(|e| LabelTreeError::json(source_name, e))
}
