//! Id lookups for a label tree, built once per data replacement.
//!
//! Nodes do not store parent links. The index keeps a pre-order listing of
//! every id, the child-index path to each node, and a `child id -> parent id`
//! map, so cascade and search never re-walk the tree from the root.

use std::collections::HashMap;

use crate::domain::entities::TreeNode;

/// Pre-order positions, paths and parent links for one tree
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    preorder: Vec<String>,
    position: HashMap<String, usize>,
    paths: HashMap<String, Vec<usize>>,
    parent: HashMap<String, String>,
    depth: HashMap<String, usize>,
}

impl TreeIndex {
    pub fn build(nodes: &[TreeNode]) -> Self {
        let mut index = Self::default();
        for (i, node) in nodes.iter().enumerate() {
            index.visit(node, None, vec![i], 0);
        }
        index
    }

    fn visit(&mut self, node: &TreeNode, parent: Option<&str>, path: Vec<usize>, depth: usize) {
        let id = node.id().to_string();
        self.position.insert(id.clone(), self.preorder.len());
        self.preorder.push(id.clone());
        self.depth.insert(id.clone(), depth);
        if let Some(parent) = parent {
            self.parent.insert(id.clone(), parent.to_string());
        }

        for (i, child) in node.children().iter().enumerate() {
            let mut child_path = path.clone();
            child_path.push(i);
            self.visit(child, Some(&id), child_path, depth + 1);
        }

        self.paths.insert(id, path);
    }

    /// Every id in pre-order
    pub fn preorder(&self) -> &[String] {
        &self.preorder
    }

    /// Pre-order position of `id`
    pub fn position(&self, id: &str) -> Option<usize> {
        self.position.get(id).copied()
    }

    pub fn parent(&self, id: &str) -> Option<&str> {
        self.parent.get(id).map(String::as_str)
    }

    /// Depth below the root level (roots are 0)
    pub fn depth(&self, id: &str) -> usize {
        self.depth.get(id).copied().unwrap_or(0)
    }

    /// Ancestor ids from the direct parent up to the root
    pub fn ancestors(&self, id: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            out.push(parent.to_string());
            current = self.parent(parent);
        }
        out
    }

    /// Resolve an id to its node inside `nodes` (the forest this index was
    /// built from)
    pub fn resolve<'a>(&self, nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
        let path = self.paths.get(id)?;
        let (first, rest) = path.split_first()?;
        let mut node = nodes.get(*first)?;
        for &i in rest {
            node = node.children().get(i)?;
        }
        Some(node)
    }

    pub fn len(&self) -> usize {
        self.preorder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preorder.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Vec<TreeNode> {
        vec![
            TreeNode::category("1", "2025")
                .with_child(TreeNode::leaf("1.1", "coral"))
                .with_child(
                    TreeNode::category("1.2", "reef").with_child(TreeNode::leaf("1.2.1", "algae")),
                ),
            TreeNode::leaf("2", "loose"),
        ]
    }

    #[test]
    fn preorder_matches_depth_first_walk() {
        let index = TreeIndex::build(&forest());
        assert_eq!(index.preorder(), ["1", "1.1", "1.2", "1.2.1", "2"]);
        assert_eq!(index.position("1.2.1"), Some(3));
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn parents_and_ancestors() {
        let index = TreeIndex::build(&forest());
        assert_eq!(index.parent("1.2.1"), Some("1.2"));
        assert_eq!(index.parent("1"), None);
        assert_eq!(index.ancestors("1.2.1"), vec!["1.2", "1"]);
        assert!(index.ancestors("2").is_empty());
    }

    #[test]
    fn depth_counts_from_roots() {
        let index = TreeIndex::build(&forest());
        assert_eq!(index.depth("1"), 0);
        assert_eq!(index.depth("1.2.1"), 2);
    }

    #[test]
    fn resolve_follows_paths() {
        let nodes = forest();
        let index = TreeIndex::build(&nodes);
        assert_eq!(index.resolve(&nodes, "1.2.1").unwrap().name(), "algae");
        assert_eq!(index.resolve(&nodes, "2").unwrap().name(), "loose");
        assert!(index.resolve(&nodes, "missing").is_none());
    }

    #[test]
    fn empty_forest() {
        let index = TreeIndex::build(&[]);
        assert!(index.is_empty());
    }
}
