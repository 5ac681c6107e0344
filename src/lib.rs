//! labeltree - hierarchical label picker
//!
//! A tree view with cascading multi-select and a name filter, plus the
//! request builders that turn a selection into label admin and dataset
//! download calls.

pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use domain::entities::{LabelGroup, TreeNode};
pub use domain::services::{
    delete_plan, DownloadRequest, ModifyTarget, SelectionModel, SelectionSummary, TreeIndex,
};
pub use domain::value_objects::{ApiRequest, HttpMethod};
pub use error::{LabelTreeError, LabelTreeResult};
pub use ui::widgets::tree_view::{
    ClickModifiers, MemoryTarget, RenderTarget, TreeView, TreeViewOptions,
};
