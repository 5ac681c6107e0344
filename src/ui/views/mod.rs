pub mod history;

pub use history::{DownloadHistoryView, UploadHistoryView};
