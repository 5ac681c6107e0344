//! Upload and download batch records from the history endpoints.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// How a batch status should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Still running
    Pending,
    Success,
    Failure,
}

/// Download batch lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadStatus {
    Starting,
    AssemblingLabels,
    AssemblingImages,
    AddingManifest,
    Ready,
    Failed,
    #[serde(other)]
    Unknown,
}

impl DownloadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::AssemblingLabels => "assembling_labels",
            Self::AssemblingImages => "assembling_images",
            Self::AddingManifest => "adding_manifest",
            Self::Ready => "ready",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            Self::Ready => StatusTone::Success,
            Self::Failed => StatusTone::Failure,
            _ => StatusTone::Pending,
        }
    }
}

/// Upload batch lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Uploading,
    Processing,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl UploadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uploading => "uploading",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            Self::Completed => StatusTone::Success,
            Self::Failed => StatusTone::Failure,
            _ => StatusTone::Pending,
        }
    }
}

/// A download batch as listed by `/api/v1/download-batches/history/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadBatch {
    pub id: String,
    pub status: DownloadStatus,
    #[serde(default)]
    pub image_count: u64,
    pub start_time: String,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub annotations: Option<serde_json::Value>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// An upload batch as listed by the upload history endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadBatch {
    pub id: String,
    pub status: UploadStatus,
    #[serde(default)]
    pub images_valid: u64,
    #[serde(default)]
    pub images_rejected: u64,
    #[serde(default)]
    pub images_total: u64,
    #[serde(default)]
    pub file_size: Option<u64>,
    pub start_time: String,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Parse the backend's timestamp, ignoring fractional seconds.
///
/// Naive timestamps are shown as-is; timestamps with an offset are shown in
/// that offset's wall-clock time.
pub fn parse_start_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    let without_fraction = match raw.find('.') {
        Some(dot) => {
            let rest = &raw[dot + 1..];
            let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
            format!("{}{}", &raw[..dot], &rest[digits..])
        }
        None => raw.to_string(),
    };

    NaiveDateTime::parse_from_str(&without_fraction, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&without_fraction, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn download_status_parses_snake_case() {
        let status: DownloadStatus = serde_json::from_str(r#""assembling_labels""#).unwrap();
        assert_eq!(status, DownloadStatus::AssemblingLabels);
        assert_eq!(status.tone(), StatusTone::Pending);
    }

    #[test]
    fn unknown_status_does_not_fail_the_row() {
        let status: UploadStatus = serde_json::from_str(r#""archived""#).unwrap();
        assert_eq!(status, UploadStatus::Unknown);
    }

    #[test]
    fn start_time_drops_fraction() {
        let t = parse_start_time("2025-03-02T14:05:06.123456").unwrap();
        assert_eq!((t.day(), t.month(), t.year()), (2, 3, 2025));
        assert_eq!((t.hour(), t.minute(), t.second()), (14, 5, 6));
    }

    #[test]
    fn start_time_accepts_offsets() {
        let t = parse_start_time("2025-03-02T14:05:06+02:00").unwrap();
        assert_eq!(t.hour(), 14);
    }

    #[test]
    fn start_time_rejects_garbage() {
        assert!(parse_start_time("yesterday").is_none());
    }

    #[test]
    fn download_batch_tolerates_missing_optionals() {
        let batch: DownloadBatch = serde_json::from_str(
            r#"{"id": "abcdef123", "status": "ready", "image_count": 12, "start_time": "2025-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(batch.error_message, None);
        assert_eq!(batch.status.tone(), StatusTone::Success);
    }
}
