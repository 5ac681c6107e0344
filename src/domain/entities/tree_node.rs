//! TreeNode entity - one entry of a label taxonomy
//!
//! A node is either a category that owns an ordered list of children, or a
//! leaf. On the wire the two are told apart by the presence of a `children`
//! key (an empty list still means "category"); in Rust every call site
//! matches on the variant instead.
//!
//! Ids must be unique across the whole tree. Nothing here checks that; the
//! code supplying the data is responsible for it.

use serde::{Deserialize, Serialize};

/// A node in a label tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// A grouping node (super-category in the dashboard's vocabulary)
    Category {
        id: String,
        name: String,
        children: Vec<TreeNode>,
    },
    /// A single selectable item
    Leaf { id: String, name: String },
}

impl TreeNode {
    /// Create an empty category node
    pub fn category(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Category {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a leaf node
    pub fn leaf(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Leaf {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Builder-style helper for categories; leaves are returned unchanged.
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.add_child(child);
        self
    }

    /// Append a child. Has no effect on leaves.
    pub fn add_child(&mut self, child: TreeNode) {
        if let Self::Category { children, .. } = self {
            children.push(child);
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Category { id, .. } | Self::Leaf { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Category { name, .. } | Self::Leaf { name, .. } => name,
        }
    }

    /// Children of a category; empty for leaves
    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::Category { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category { .. })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Ids of every transitive descendant, in pre-order
    pub fn descendant_ids(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_descendants(self, &mut out);
        out
    }

    /// Number of nodes in this subtree, excluding the node itself
    pub fn descendant_count(&self) -> usize {
        self.children()
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

fn collect_descendants(node: &TreeNode, out: &mut Vec<String>) {
    for child in node.children() {
        out.push(child.id().to_string());
        collect_descendants(child, out);
    }
}

/// Parse a TreeNode forest from JSON
pub fn parse_tree_json(content: &str, source_name: &str) -> crate::LabelTreeResult<Vec<TreeNode>> {
    serde_json::from_str(content).map_err(|e| crate::LabelTreeError::json(source_name, e))
}
