//! Domain Entities
//!
//! Data that crosses the boundary to the backend or the host page.
//! - `TreeNode` - A category or leaf of a label taxonomy
//! - `LabelGroup` - Backend label catalog entry
//! - `DownloadBatch` / `UploadBatch` - Batch history records

mod batch;
mod label_group;
mod tree_node;

pub use batch::{
    parse_start_time, DownloadBatch, DownloadStatus, StatusTone, UploadBatch, UploadStatus,
};
pub use label_group::{labels_to_tree, parse_label_json, LabelCategory, LabelGroup};
pub use tree_node::{parse_tree_json, TreeNode};
