//! History command handler

use std::path::Path;

use anyhow::{Context, Result};

use labeltree::domain::entities::{DownloadBatch, UploadBatch};
use labeltree::presentation::input::load_json;
use labeltree::presentation::{print_json, HistoryKind};
use labeltree::ui::views::{DownloadHistoryView, UploadHistoryView};

use super::Session;

pub fn cmd_history(session: &Session, file: &Path, kind: HistoryKind) -> Result<()> {
    let ui = &session.ui;
    let context = || format!("failed to load history from {}", file.display());

    match kind {
        HistoryKind::Download => {
            let batches: Vec<DownloadBatch> = load_json(file).with_context(context)?;
            if ui.json {
                print_json(&batches)?;
            } else {
                print!(
                    "{}",
                    DownloadHistoryView::new(&batches).render(ui.color, &ui.icons())
                );
            }
        }
        HistoryKind::Upload => {
            let batches: Vec<UploadBatch> = load_json(file).with_context(context)?;
            if ui.json {
                print_json(&batches)?;
            } else {
                print!(
                    "{}",
                    UploadHistoryView::new(&batches).render(ui.color, &ui.icons())
                );
            }
        }
    }
    Ok(())
}
