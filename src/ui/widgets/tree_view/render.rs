//! Text rendering for the tree view.
//!
//! Rows, the search line, and the status/help bars are rendered to plain
//! strings; the render target decides how they reach the screen.

use unicode_width::UnicodeWidthChar;

use crate::ui::theme::IconSet;

use super::target::Frame;
use super::view::{RowKind, SelectionState, VisibleRow};

/// Search input line shown above the rows
#[derive(Debug, Clone, Copy)]
pub struct SearchLine<'a> {
    pub query: &'a str,
    pub placeholder: &'a str,
    /// The query is being edited
    pub active: bool,
}

/// Render a single tree row to a string
pub fn render_row(row: &VisibleRow, is_active: bool, icons: &IconSet) -> String {
    let cursor = if is_active {
        format!("{} ", icons.cursor)
    } else {
        " ".repeat(icons.cursor.chars().count() + 1)
    };
    let indent = "  ".repeat(row.depth);

    let state_icon = match row.state {
        SelectionState::Selected => icons.selected,
        SelectionState::Unselected => icons.unselected,
        SelectionState::Partial => icons.partial,
    };

    let (expand_icon, count_suffix) = match row.kind {
        RowKind::Category {
            expanded,
            child_count,
        } => {
            let icon = if expanded {
                icons.expanded
            } else {
                icons.collapsed
            };
            (format!("{} ", icon), format!(" ({})", child_count))
        }
        RowKind::Leaf => (
            " ".repeat(icons.expanded.chars().count() + 1),
            String::new(),
        ),
    };

    format!(
        "{}{}{}{} {}{}",
        cursor, indent, expand_icon, state_icon, row.name, count_suffix
    )
}

/// Render the search line
pub fn render_search_line(search: &SearchLine<'_>, icons: &IconSet) -> String {
    let text = if search.query.is_empty() && !search.active {
        search.placeholder
    } else {
        search.query
    };
    let caret = if search.active { "_" } else { "" };
    format!("{} {}{}", icons.search, text, caret)
}

/// Render a whole frame
pub fn render_frame(
    rows: &[VisibleRow],
    cursor: usize,
    search: Option<SearchLine<'_>>,
    icons: &IconSet,
) -> Frame {
    let mut lines = Vec::with_capacity(rows.len() + 2);

    if let Some(search) = search {
        lines.push(render_search_line(&search, icons));
        lines.push(String::new());
    }
    let header_lines = lines.len();

    if rows.is_empty() {
        lines.push("  (no matching labels)".to_string());
    }
    for (i, row) in rows.iter().enumerate() {
        lines.push(render_row(row, i == cursor, icons));
    }

    Frame {
        lines,
        header_lines,
        cursor_line: (!rows.is_empty()).then_some(header_lines + cursor),
    }
}

/// Render the status bar showing selection counts
pub fn render_status_bar(selected: usize, total: usize, icons: &IconSet) -> String {
    format!(
        "Selected: {}/{} labels\n\n{} = selected    {} = partial    {} = not selected",
        selected, total, icons.selected, icons.partial, icons.unselected
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(search_enabled: bool) -> String {
    let search = if search_enabled { "    [/] Search" } else { "" };
    format!(
        "[Space] Toggle    [o] Only    [v] Range    [a] All    [Esc] Clear{}\n\
         [Enter] Confirm    [q] Quit    (↑↓ move, →← expand/collapse, mouse: click / shift / ctrl)",
        search
    )
}

/// Cut `s` so it occupies at most `width` terminal columns. A width of 0
/// means unknown and leaves the string alone.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return s.to_string();
    }
    let mut used = 0;
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
