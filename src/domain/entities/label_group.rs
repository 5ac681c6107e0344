//! Label catalog entities as returned by the backend stats endpoint.
//!
//! The endpoint answers with `[{id, name, categories: [{id, name}]}]`. Ids
//! arrive as integers from the current backend but older deployments sent
//! strings, so both are accepted and normalized to strings.

use serde::{Deserialize, Deserializer, Serialize};

use super::tree_node::TreeNode;

/// A super-category with its categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelGroup {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<LabelCategory>,
}

/// A single label category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCategory {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    pub name: String,
}

impl LabelGroup {
    /// Convert into a category node whose children are leaves
    pub fn into_tree_node(self) -> TreeNode {
        TreeNode::Category {
            id: self.id,
            name: self.name,
            children: self
                .categories
                .into_iter()
                .map(|c| TreeNode::Leaf {
                    id: c.id,
                    name: c.name,
                })
                .collect(),
        }
    }
}

/// Convert backend label groups into tree data, keeping backend order
pub fn labels_to_tree(groups: Vec<LabelGroup>) -> Vec<TreeNode> {
    groups.into_iter().map(LabelGroup::into_tree_node).collect()
}

/// Parse the stats endpoint payload
pub fn parse_label_json(
    content: &str,
    source_name: &str,
) -> crate::LabelTreeResult<Vec<LabelGroup>> {
    serde_json::from_str(content).map_err(|e| crate::LabelTreeError::json(source_name, e))
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_and_string_ids() {
        let groups = parse_label_json(
            r#"[{"id": 3, "name": "Fish", "categories": [{"id": "7", "name": "Cod"}]}]"#,
            "stats",
        )
        .unwrap();

        assert_eq!(groups[0].id, "3");
        assert_eq!(groups[0].categories[0].id, "7");
    }

    #[test]
    fn missing_categories_defaults_to_empty() {
        let groups = parse_label_json(r#"[{"id": 1, "name": "Empty"}]"#, "stats").unwrap();
        assert!(groups[0].categories.is_empty());
    }

    #[test]
    fn groups_become_categories_even_without_children() {
        let groups = parse_label_json(
            r#"[{"id": 1, "name": "Empty", "categories": []},
                {"id": 2, "name": "Coral", "categories": [{"id": 10, "name": "Brain"}, {"id": 11, "name": "Fan"}]}]"#,
            "stats",
        )
        .unwrap();

        let tree = labels_to_tree(groups);
        assert_eq!(tree.len(), 2);
        assert!(tree[0].is_category());
        assert!(tree[0].children().is_empty());
        assert_eq!(tree[1].children()[1], TreeNode::leaf("11", "Fan"));
    }

    #[test]
    fn rejects_non_array_payload() {
        assert!(parse_label_json(r#"{"detail": "Not authorized"}"#, "stats").is_err());
    }
}
