//! Download request body built from a tree selection.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::{ApiRequest, HttpMethod};
use crate::error::{LabelTreeError, LabelTreeResult};

/// Image counts the backend accepts for one download batch
pub const DOWNLOAD_COUNT_RANGE: RangeInclusive<u32> = 1..=10_000;

/// One annotation filter entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationSelection {
    pub id: String,
    #[serde(rename = "super")]
    pub is_super: bool,
}

/// Body of `PUT /api/v1/download`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRequest {
    pub annotations: Vec<AnnotationSelection>,
    pub count: u32,
    pub non_match_images: bool,
}

impl DownloadRequest {
    /// Build a request from the selected nodes.
    ///
    /// Only leaves become annotation filters; a selected category is
    /// represented by its (cascaded) children.
    pub fn from_selection(
        selected: &[TreeNode],
        count: u32,
        non_match_images: bool,
    ) -> LabelTreeResult<Self> {
        validate_count(count)?;
        let annotations = selected
            .iter()
            .filter_map(|node| match node {
                TreeNode::Leaf { id, .. } => Some(AnnotationSelection {
                    id: id.clone(),
                    is_super: false,
                }),
                TreeNode::Category { .. } => None,
            })
            .collect();

        Ok(Self {
            annotations,
            count,
            non_match_images,
        })
    }

    pub fn request(&self) -> LabelTreeResult<ApiRequest> {
        let body = serde_json::to_value(self)
            .map_err(|e| LabelTreeError::json("download request", e))?;
        Ok(ApiRequest::new(HttpMethod::Put, "/api/v1/download").with_body(body))
    }
}

/// Reject counts the backend would refuse
pub fn validate_count(count: u32) -> LabelTreeResult<()> {
    if DOWNLOAD_COUNT_RANGE.contains(&count) {
        Ok(())
    } else {
        Err(LabelTreeError::DownloadCountOutOfRange {
            count,
            min: *DOWNLOAD_COUNT_RANGE.start(),
            max: *DOWNLOAD_COUNT_RANGE.end(),
        })
    }
}
