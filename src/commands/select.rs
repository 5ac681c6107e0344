//! Select command handler
//!
//! Runs the interactive tree view and prints the confirmed selection as
//! JSON, the input format of the other commands.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use labeltree::domain::services::SelectionSummary;
use labeltree::presentation::input::load_tree;
use labeltree::presentation::print_json;
use labeltree::ui::widgets::tree_view::{run_interactive, TerminalTarget, TreeView};
use labeltree::LabelTreeError;

use super::Session;

pub fn cmd_select(
    session: &Session,
    data: &Path,
    backend: bool,
    single: bool,
    no_cascade: bool,
) -> Result<()> {
    if !session.ui.caps.is_tty {
        bail!("select needs an interactive terminal; use `labeltree tree` for plain output");
    }

    let nodes = load_tree(data, backend)
        .with_context(|| format!("failed to load tree from {}", data.display()))?;

    let mut options = session.config.tree.view_options();
    if single {
        options.multi_select_enabled = false;
    }
    if no_cascade {
        options.cascade_select_children = false;
    }

    let target = TerminalTarget::new(
        std::io::stdout(),
        session.ui.caps.width,
        session.ui.caps.height,
        session.ui.color,
    );
    let mut view = TreeView::new(target, nodes, options)
        .with_icons(session.ui.icons())
        .on_selection_change(|selected| {
            let summary = SelectionSummary::from_nodes(selected);
            debug!(title = %summary.title, names = %summary.names, "selection changed");
        });

    let selected = run_interactive(&mut view)
        .context("terminal error")?
        .ok_or(LabelTreeError::SelectionAborted)?;

    if !session.ui.json {
        eprintln!("{}", SelectionSummary::from_nodes(&selected).title);
    }
    print_json(&selected)?;
    Ok(())
}
