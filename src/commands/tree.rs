//! Tree command handler
//!
//! Prints the tree (or the rows matching a filter) without a terminal loop.

use std::path::Path;

use anyhow::{Context, Result};

use labeltree::presentation::input::load_tree;
use labeltree::presentation::print_json;
use labeltree::ui::widgets::tree_view::{render_row, MemoryTarget, TreeView};

use super::Session;

pub fn cmd_tree(
    session: &Session,
    data: &Path,
    query: Option<&str>,
    expanded: bool,
    backend: bool,
) -> Result<()> {
    let nodes = load_tree(data, backend)
        .with_context(|| format!("failed to load tree from {}", data.display()))?;

    let mut options = session.config.tree.view_options();
    options.initially_expanded |= expanded;
    options.search_enabled |= query.is_some();

    let icons = session.ui.icons();
    let mut view = TreeView::new(MemoryTarget::new(), nodes, options).with_icons(icons);
    if let Some(query) = query {
        view.set_search_query(query);
    }
    let rows = view.visible_rows();

    if session.ui.json {
        let rows: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "id": row.id,
                    "name": row.name,
                    "depth": row.depth,
                })
            })
            .collect();
        print_json(&rows)?;
        return Ok(());
    }

    if rows.is_empty() {
        println!("(no matching labels)");
        return Ok(());
    }
    for row in &rows {
        println!("{}", render_row(row, false, &icons));
    }
    Ok(())
}
