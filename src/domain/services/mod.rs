//! Domain Services
//!
//! Pure logic over label trees and selections. No I/O, no rendering.

mod download_request;
mod label_admin;
mod search;
mod selection;
mod tree_index;

pub use download_request::{
    validate_count, AnnotationSelection, DownloadRequest, DOWNLOAD_COUNT_RANGE,
};
pub use label_admin::{
    delete_plan, CreateCategory, CreateSuperCategory, ModifyTarget, SelectionSummary,
    NO_SUPER_CATEGORY,
};
pub use search::filter_preorder;
pub use selection::SelectionModel;
pub use tree_index::TreeIndex;
