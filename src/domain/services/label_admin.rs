//! Label administration requests derived from a tree selection.
//!
//! Super-categories are the tree's category nodes; categories are its
//! leaves. Every function here is pure and returns the request the admin
//! page would send.

use serde::Serialize;
use serde_json::json;

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::{ApiRequest, HttpMethod};
use crate::error::{LabelTreeError, LabelTreeResult};

/// Value the super-category picker uses for "none"
pub const NO_SUPER_CATEGORY: &str = "0";

/// Create a new super-category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateSuperCategory {
    pub name: String,
}

impl CreateSuperCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn request(&self) -> ApiRequest {
        ApiRequest::new(HttpMethod::Post, "/internal/categories/super/create")
            .with_body(json!({ "name": self.name }))
    }
}

/// Create a new category, optionally under a super-category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_category_id: Option<String>,
}

impl CreateCategory {
    /// `super_category` is the picker value; `"0"` or empty means none.
    pub fn new(name: impl Into<String>, super_category: Option<&str>) -> Self {
        let super_category_id = super_category
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != NO_SUPER_CATEGORY)
            .map(str::to_string);
        Self {
            name: name.into(),
            super_category_id,
        }
    }

    pub fn request(&self) -> ApiRequest {
        let body = match &self.super_category_id {
            Some(id) => json!({ "name": self.name, "super_category_id": id }),
            None => json!({ "name": self.name }),
        };
        ApiRequest::new(HttpMethod::Post, "/internal/categories/create").with_body(body)
    }
}

/// One delete request per selected node, in selection order
pub fn delete_plan(selected: &[TreeNode]) -> Vec<ApiRequest> {
    selected
        .iter()
        .map(|node| {
            let base = match node {
                TreeNode::Category { .. } => "/internal/categories/super/remove",
                TreeNode::Leaf { .. } => "/internal/categories/remove",
            };
            ApiRequest::new(
                HttpMethod::Delete,
                ApiRequest::path_with_query(base, &[("id", node.id())]),
            )
        })
        .collect()
}

/// What a modify action applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifyTarget {
    /// Rename a super-category
    SuperCategory { id: String, name: String },
    /// Rename a category and optionally move it
    Category { id: String, name: String },
}

impl ModifyTarget {
    /// Pick the modify target from the current selection.
    ///
    /// A category node may be selected together with its cascaded children;
    /// the first node then decides. Several nodes starting with a leaf are
    /// ambiguous.
    pub fn from_selection(selected: &[TreeNode]) -> LabelTreeResult<Self> {
        let first = selected.first().ok_or(LabelTreeError::NothingSelected)?;
        match first {
            TreeNode::Leaf { .. } if selected.len() > 1 => Err(LabelTreeError::AmbiguousModify),
            TreeNode::Leaf { id, name } => Ok(Self::Category {
                id: id.clone(),
                name: name.clone(),
            }),
            TreeNode::Category { id, name, .. } => Ok(Self::SuperCategory {
                id: id.clone(),
                name: name.clone(),
            }),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::SuperCategory { id, .. } | Self::Category { id, .. } => id,
        }
    }

    /// Current name, shown as the placeholder of the rename field
    pub fn current_name(&self) -> &str {
        match self {
            Self::SuperCategory { name, .. } | Self::Category { name, .. } => name,
        }
    }

    /// Build the modify request. `new_super_category` only applies to
    /// categories and defaults to `"0"`.
    pub fn request(&self, new_name: &str, new_super_category: Option<&str>) -> ApiRequest {
        let path = match self {
            Self::SuperCategory { id, .. } => ApiRequest::path_with_query(
                "/internal/categories/super/modify",
                &[("id", id.as_str()), ("new_name", new_name)],
            ),
            Self::Category { id, .. } => ApiRequest::path_with_query(
                "/internal/categories/modify",
                &[
                    ("id", id.as_str()),
                    ("new_name", new_name),
                    (
                        "new_super_cat",
                        new_super_category.unwrap_or(NO_SUPER_CATEGORY),
                    ),
                ],
            ),
        };
        ApiRequest::new(HttpMethod::Put, path)
    }
}

/// The "N Labels selected: [...]" text shown next to the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub title: String,
    pub names: String,
}

impl SelectionSummary {
    pub fn from_nodes(selected: &[TreeNode]) -> Self {
        let count = selected.len();
        let word = if count == 1 { "Label" } else { "Labels" };
        let names: Vec<String> = selected
            .iter()
            .map(|n| format!("\"{}\"", n.name()))
            .collect();
        Self {
            title: format!("{} {} selected:", count, word),
            names: format!("[{}]", names.join(", ")),
        }
    }
}
