//! Case-insensitive name filter for label trees.

use std::collections::HashSet;

use crate::domain::entities::TreeNode;

use super::tree_index::TreeIndex;

/// Ids whose name contains `query` (ignoring case), plus the ancestor chain
/// of each match, in pre-order. Only the empty query keeps every id;
/// whitespace is matched like any other character.
pub fn filter_preorder(nodes: &[TreeNode], index: &TreeIndex, query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return index.preorder().to_vec();
    }

    let mut keep: HashSet<String> = HashSet::new();
    for id in index.preorder() {
        let Some(node) = index.resolve(nodes, id) else {
            continue;
        };
        if node.name().to_lowercase().contains(&needle) {
            keep.insert(id.clone());
            keep.extend(index.ancestors(id));
        }
    }

    index
        .preorder()
        .iter()
        .filter(|id| keep.contains(*id))
        .cloned()
        .collect()
}
