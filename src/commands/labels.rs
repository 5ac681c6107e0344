//! Label admin and download request commands
//!
//! Each command reads a selection (the JSON `select` prints) and prints the
//! backend request it maps to.

use std::path::Path;

use anyhow::{Context, Result};

use labeltree::domain::entities::TreeNode;
use labeltree::domain::services::{
    delete_plan, CreateCategory, CreateSuperCategory, DownloadRequest, ModifyTarget,
    SelectionSummary,
};
use labeltree::domain::value_objects::ApiRequest;
use labeltree::presentation::input::load_selection;
use labeltree::presentation::output::render_requests;
use labeltree::presentation::print_json;
use labeltree::LabelTreeError;

use super::Session;

fn read_selection(path: &Path) -> Result<Vec<TreeNode>> {
    load_selection(path).with_context(|| format!("failed to load selection {}", path.display()))
}

fn emit(session: &Session, requests: &[ApiRequest]) -> Result<()> {
    if session.ui.json {
        print_json(&requests)?;
    } else {
        print!("{}", render_requests(requests));
    }
    Ok(())
}

pub fn cmd_download(
    session: &Session,
    selection: &Path,
    count: u32,
    non_match_images: bool,
) -> Result<()> {
    let selected = read_selection(selection)?;
    let request = DownloadRequest::from_selection(&selected, count, non_match_images)?;
    emit(session, &[request.request()?])
}

pub fn cmd_delete(session: &Session, selection: &Path) -> Result<()> {
    let selected = read_selection(selection)?;
    if selected.is_empty() {
        return Err(LabelTreeError::NothingSelected.into());
    }
    emit(session, &delete_plan(&selected))
}

pub fn cmd_modify(
    session: &Session,
    selection: &Path,
    new_name: &str,
    new_super_category: Option<&str>,
) -> Result<()> {
    let selected = read_selection(selection)?;
    let target = ModifyTarget::from_selection(&selected)?;
    emit(session, &[target.request(new_name, new_super_category)])
}

pub fn cmd_create(
    session: &Session,
    name: &str,
    is_super: bool,
    parent: Option<&str>,
) -> Result<()> {
    let request = if is_super {
        CreateSuperCategory::new(name).request()
    } else {
        CreateCategory::new(name, parent).request()
    };
    emit(session, &[request])
}

pub fn cmd_summary(session: &Session, selection: &Path) -> Result<()> {
    let selected = read_selection(selection)?;
    let summary = SelectionSummary::from_nodes(&selected);
    if session.ui.json {
        print_json(&summary)?;
    } else {
        println!("{}", summary.title);
        println!("{}", summary.names);
    }
    Ok(())
}
