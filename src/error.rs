//! Error types for labeltree
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for labeltree operations
pub type LabelTreeResult<T> = Result<T, LabelTreeError>;

/// Main error type for labeltree operations
#[derive(Error, Debug)]
pub enum LabelTreeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input could not be parsed
    #[error("invalid JSON in {source_name}: {message}")]
    InvalidJson {
        source_name: String,
        message: String,
    },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Download image count outside the accepted range
    #[error("image count {count} is out of range (expected {min}..={max})")]
    DownloadCountOutOfRange { count: u32, min: u32, max: u32 },

    /// An operation needs a selection but none was made
    #[error("nothing selected")]
    NothingSelected,

    /// Modify needs a single category or a super-category first
    #[error("only select 1 category or super category")]
    AmbiguousModify,

    /// Interactive selection was aborted by the user
    #[error("selection aborted by user")]
    SelectionAborted,
}

impl LabelTreeError {
    pub(crate) fn json(source_name: impl Into<String>, err: serde_json::Error) -> Self {
        Self::InvalidJson {
            source_name: source_name.into(),
            message: err.to_string(),
        }
    }
}
