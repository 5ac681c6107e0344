//! Upload and download batch history tables.

use crate::domain::entities::{parse_start_time, DownloadBatch, StatusTone, UploadBatch};
use crate::ui::style::{bold, paint, Tint};
use crate::ui::theme::IconSet;

pub struct DownloadHistoryView<'a> {
    batches: &'a [DownloadBatch],
}

impl<'a> DownloadHistoryView<'a> {
    pub fn new(batches: &'a [DownloadBatch]) -> Self {
        Self { batches }
    }

    pub fn render(&self, color: bool, icons: &IconSet) -> String {
        let mut out = String::new();
        out.push_str(&bold("Download History", color));
        out.push('\n');

        if self.batches.is_empty() {
            out.push_str(&paint("No download batches yet.", Tint::Dim, color));
            out.push('\n');
            return out;
        }

        out.push_str(&paint(
            &format!(
                "  {:<8} {:<20} {:>10}  {:<17}",
                "ID", "Status", "Images", "Started"
            ),
            Tint::Dim,
            color,
        ));
        out.push('\n');
        out.push_str(&paint(&icons.rule.repeat(60), Tint::Dim, color));
        out.push('\n');

        for batch in self.batches {
            let tone = batch.status.tone();
            out.push_str(&format!(
                "{} {:<8} {} {:>10}  {:<17}\n",
                status_icon(tone, icons, color),
                short_id(&batch.id),
                paint(
                    &format!("{:<20}", status_label(batch.status.as_str())),
                    tone.into(),
                    color
                ),
                thousands(batch.image_count),
                start_time(&batch.start_time),
            ));

            let annotations = batch
                .annotations
                .as_ref()
                .map(|a| a.to_string())
                .unwrap_or_else(|| "None".to_string());
            detail(&mut out, "Hash", batch.hash.as_deref().unwrap_or("None"));
            detail(&mut out, "Annotations", &annotations);
            detail(&mut out, "Error", error_text(&batch.error_message));
        }

        out
    }
}

pub struct UploadHistoryView<'a> {
    batches: &'a [UploadBatch],
}

impl<'a> UploadHistoryView<'a> {
    pub fn new(batches: &'a [UploadBatch]) -> Self {
        Self { batches }
    }

    pub fn render(&self, color: bool, icons: &IconSet) -> String {
        let mut out = String::new();
        out.push_str(&bold("Upload History", color));
        out.push('\n');

        if self.batches.is_empty() {
            out.push_str(&paint("No upload batches yet.", Tint::Dim, color));
            out.push('\n');
            return out;
        }

        out.push_str(&paint(
            &format!(
                "  {:<8} {:<12} {:>10} {:>10}  {:<17}",
                "ID", "Status", "Valid", "Rejected", "Started"
            ),
            Tint::Dim,
            color,
        ));
        out.push('\n');
        out.push_str(&paint(&icons.rule.repeat(64), Tint::Dim, color));
        out.push('\n');

        for batch in self.batches {
            let tone = batch.status.tone();
            let started = start_time(&batch.start_time);
            out.push_str(&format!(
                "{} {:<8} {} {} {}  {:<17}\n",
                status_icon(tone, icons, color),
                short_id(&batch.id),
                paint(
                    &format!("{:<12}", status_label(batch.status.as_str())),
                    tone.into(),
                    color
                ),
                paint(
                    &format!("{:>10}", thousands(batch.images_valid)),
                    Tint::Success,
                    color
                ),
                paint(
                    &format!("{:>10}", thousands(batch.images_rejected)),
                    Tint::Error,
                    color
                ),
                started,
            ));

            detail(&mut out, "Images Total", &batch.images_total.to_string());
            detail(
                &mut out,
                "File Size",
                &format_bytes(batch.file_size.unwrap_or(0)),
            );
            detail(&mut out, "Capture Date", &started);
            detail(&mut out, "Error", error_text(&batch.error_message));
        }

        out
    }
}

fn detail(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("           {}: {}\n", label, value));
}

fn status_icon(tone: StatusTone, icons: &IconSet, color: bool) -> String {
    let icon = match tone {
        StatusTone::Pending => icons.pending,
        StatusTone::Success => icons.success,
        StatusTone::Failure => icons.error,
    };
    paint(icon, tone.into(), color)
}

fn error_text(error: &Option<String>) -> &str {
    error.as_deref().unwrap_or("None")
}

/// First six characters of a batch id
pub fn short_id(id: &str) -> String {
    id.chars().take(6).collect()
}

/// `assembling_labels` -> `Assembling labels`. Only the first underscore
/// is replaced.
pub fn status_label(raw: &str) -> String {
    let spaced = raw.replacen('_', " ", 1);
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `1234567` -> `1,234,567`
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `dd-mm-yy HH:MM:SS`, or the raw value when it does not parse
pub fn start_time(raw: &str) -> String {
    parse_start_time(raw)
        .map(|t| t.format("%d-%m-%y %H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Binary size with up to two decimals: `0 Bytes`, `1.5 KiB`, `2 MiB`
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["Bytes", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DownloadStatus, UploadStatus};

    fn download(status: DownloadStatus) -> DownloadBatch {
        DownloadBatch {
            id: "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_string(),
            status,
            image_count: 12_500,
            start_time: "2025-03-02T14:05:06.123456".to_string(),
            hash: Some("abc123".to_string()),
            annotations: None,
            error_message: None,
        }
    }

    #[test]
    fn short_id_takes_six_chars() {
        assert_eq!(short_id("3fa85f64-5717"), "3fa85f");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn status_label_capitalises_and_spaces() {
        assert_eq!(status_label("assembling_labels"), "Assembling labels");
        assert_eq!(status_label("ready"), "Ready");
        assert_eq!(status_label("a_b_c"), "A b_c");
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn format_bytes_matches_dashboard() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(1000), "1000 Bytes");
        assert_eq!(format_bytes(1024), "1 KiB");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5 MiB");
    }

    #[test]
    fn start_time_is_condensed() {
        assert_eq!(start_time("2025-03-02T14:05:06.123456"), "02-03-25 14:05:06");
        assert_eq!(start_time("soon"), "soon");
    }

    #[test]
    fn download_table_plain() {
        let batches = vec![download(DownloadStatus::AssemblingImages)];
        let out = DownloadHistoryView::new(&batches).render(false, &IconSet::new(false));
        assert!(out.contains("[..] 3fa85f"), "{out}");
        assert!(out.contains("Assembling images"), "{out}");
        assert!(out.contains("12,500"), "{out}");
        assert!(out.contains("02-03-25 14:05:06"), "{out}");
        assert!(out.contains("Hash: abc123"), "{out}");
        assert!(out.contains("Annotations: None"), "{out}");
        assert!(out.contains("Error: None"), "{out}");
    }

    #[test]
    fn upload_table_plain() {
        let batches = vec![UploadBatch {
            id: "feedbeef99".to_string(),
            status: UploadStatus::Failed,
            images_valid: 1200,
            images_rejected: 3,
            images_total: 1203,
            file_size: Some(1536),
            start_time: "2025-01-10 08:00:00".to_string(),
            error_message: Some("archive corrupt".to_string()),
        }];
        let out = UploadHistoryView::new(&batches).render(false, &IconSet::new(false));
        assert!(out.contains("[FAIL] feedbe"), "{out}");
        assert!(out.contains("1,200"), "{out}");
        assert!(out.contains("File Size: 1.5 KiB"), "{out}");
        assert!(out.contains("Capture Date: 10-01-25 08:00:00"), "{out}");
        assert!(out.contains("Error: archive corrupt"), "{out}");
    }

    #[test]
    fn empty_history_says_so() {
        let out = UploadHistoryView::new(&[]).render(false, &IconSet::new(true));
        assert!(out.contains("No upload batches yet."));
    }
}
