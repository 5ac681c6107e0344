//! TreeView state management and click handling.
//!
//! The view owns the label forest, a [`TreeIndex`] built once per data
//! replacement, the expansion set, the search query and a
//! [`SelectionModel`] over the flattened (search-filtered) order. Clicks are
//! translated into model calls, cascade is applied to the ids the action
//! touched, and the host callback receives the resolved nodes.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::entities::TreeNode;
use crate::domain::services::{filter_preorder, SelectionModel, TreeIndex};
use crate::ui::theme::IconSet;

use super::render::{render_frame, render_help_bar, render_status_bar, SearchLine};
use super::target::RenderTarget;

/// Options recognized by [`TreeView::new`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeViewOptions {
    pub search_enabled: bool,
    pub search_placeholder: String,
    pub initially_expanded: bool,
    /// When false every click behaves as a plain click
    pub multi_select_enabled: bool,
    /// Selecting or deselecting a category does the same to its descendants
    pub cascade_select_children: bool,
}

impl Default for TreeViewOptions {
    fn default() -> Self {
        Self {
            search_enabled: true,
            search_placeholder: "Search...".to_string(),
            initially_expanded: false,
            multi_select_enabled: true,
            cascade_select_children: true,
        }
    }
}

/// Modifier keys held during a click
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub shift: bool,
    /// Ctrl, or Cmd on macOS
    pub ctrl: bool,
}

impl ClickModifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };
}

/// Selection state shown for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Selected,
    Unselected,
    /// Unselected category with at least one selected descendant
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Category { expanded: bool, child_count: usize },
    Leaf,
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    /// Position in the flattened order (the selection index space)
    pub index: usize,
    pub id: String,
    pub name: String,
    pub depth: usize,
    pub kind: RowKind,
    pub state: SelectionState,
}

type SelectionCallback = Box<dyn FnMut(&[TreeNode])>;

/// Hierarchical multi-select label picker
pub struct TreeView<T: RenderTarget> {
    nodes: Vec<TreeNode>,
    index: TreeIndex,
    selection: SelectionModel,
    expanded: HashSet<String>,
    search_query: String,
    search_editing: bool,
    /// Position in `visible_rows()`
    cursor: usize,
    options: TreeViewOptions,
    on_change: Option<SelectionCallback>,
    target: T,
    icons: IconSet,
}

impl<T: RenderTarget> TreeView<T> {
    /// Build the view and render it once
    pub fn new(target: T, data: Vec<TreeNode>, options: TreeViewOptions) -> Self {
        let mut view = Self {
            nodes: Vec::new(),
            index: TreeIndex::default(),
            selection: SelectionModel::default(),
            expanded: HashSet::new(),
            search_query: String::new(),
            search_editing: false,
            cursor: 0,
            options,
            on_change: None,
            target,
            icons: IconSet::new(true),
        };
        view.set_data(data);
        view
    }

    /// Register the callback invoked after every committed selection change
    pub fn on_selection_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&[TreeNode]) + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Swap the icon set (ASCII terminals) and re-render
    pub fn with_icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self.render();
        self
    }

    /// Replace the tree. The selection starts empty and the callback is not
    /// invoked; the search query is kept.
    pub fn set_data(&mut self, data: Vec<TreeNode>) {
        self.nodes = data;
        self.index = TreeIndex::build(&self.nodes);
        self.expanded = if self.options.initially_expanded {
            self.category_ids()
        } else {
            HashSet::new()
        };
        let order = filter_preorder(&self.nodes, &self.index, &self.search_query);
        self.selection = SelectionModel::new(order);
        self.cursor = 0;
        debug!(nodes = self.index.len(), "tree data replaced");
        self.render();
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn options(&self) -> &TreeViewOptions {
        &self.options
    }

    /// Selected nodes in tree order. Categories carry their children.
    pub fn selected_nodes(&self) -> Vec<TreeNode> {
        self.index
            .preorder()
            .iter()
            .filter(|id| self.selection.is_selected(id))
            .filter_map(|id| self.index.resolve(&self.nodes, id))
            .cloned()
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// The flattened order: ids passing the search filter, in tree order
    pub fn flattened_order(&self) -> &[String] {
        self.selection.order()
    }

    /// Apply a click on flattened index `index`. Out-of-range indices are
    /// ignored.
    ///
    /// The range anchor is tracked by node: a filter change moves it to the
    /// anchor node's new index, or drops it when that node is filtered out.
    pub fn handle_click(&mut self, index: usize, modifiers: ClickModifiers) {
        let order_len = self.selection.order().len();
        if index >= order_len {
            debug!(index, order_len, "click outside flattened order ignored");
            return;
        }
        let anchor = self.selection.anchor().filter(|a| *a < order_len);

        let touched = if !self.options.multi_select_enabled {
            self.selection.select_single(index);
            self.id_range(index, index)
        } else if modifiers.shift {
            match anchor {
                Some(anchor) => {
                    self.selection.select_range(anchor, index);
                    self.id_range(anchor, index)
                }
                None => {
                    self.selection.select_single(index);
                    self.id_range(index, index)
                }
            }
        } else if modifiers.ctrl {
            self.selection.toggle(index);
            self.id_range(index, index)
        } else {
            self.selection.select_single(index);
            self.id_range(index, index)
        };

        self.commit(touched);
    }

    /// Click the row under the cursor
    pub fn click_cursor(&mut self, modifiers: ClickModifiers) {
        if let Some(index) = self.cursor_index() {
            self.handle_click(index, modifiers);
        }
    }

    /// Click the `row`-th visible row (mouse input). Rows past the end are
    /// ignored.
    pub fn click_visible_row(&mut self, row: usize, modifiers: ClickModifiers) {
        let Some(index) = self.visible_rows().get(row).map(|r| r.index) else {
            return;
        };
        self.cursor = row;
        self.handle_click(index, modifiers);
    }

    /// Select every node in the flattened order. Ignored without
    /// multi-select.
    pub fn select_all(&mut self) {
        if !self.options.multi_select_enabled {
            return;
        }
        self.selection.select_all();
        let touched = self.selection.order().to_vec();
        self.commit(touched);
    }

    /// Drop the selection and the range anchor
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.commit(Vec::new());
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Narrow the flattened order to matching names and their ancestors.
    /// The selection is untouched.
    pub fn set_search_query(&mut self, query: &str) {
        if !self.options.search_enabled {
            return;
        }
        self.search_query = query.to_string();
        let order = filter_preorder(&self.nodes, &self.index, &self.search_query);
        debug!(query, matches = order.len(), "search filter applied");
        self.selection.set_order(order);
        self.clamp_cursor();
        self.render();
    }

    /// Show the search line in editing mode
    pub fn set_search_editing(&mut self, editing: bool) {
        if !self.options.search_enabled {
            return;
        }
        self.search_editing = editing;
        self.render();
    }

    pub fn is_search_editing(&self) -> bool {
        self.search_editing
    }

    fn is_filtering(&self) -> bool {
        !self.search_query.is_empty()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn expand(&mut self, id: &str) {
        if self.is_category(id) && self.expanded.insert(id.to_string()) {
            self.render();
        }
    }

    pub fn collapse(&mut self, id: &str) {
        if self.expanded.remove(id) {
            self.clamp_cursor();
            self.render();
        }
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.collapse(id);
        } else {
            self.expand(id);
        }
    }

    /// Expand the category under the cursor
    pub fn expand_cursor(&mut self) {
        if let Some(row) = self.cursor_row() {
            self.expand(&row.id);
        }
    }

    /// Collapse the category under the cursor, or jump to the parent row
    pub fn collapse_cursor(&mut self) {
        let Some(row) = self.cursor_row() else {
            return;
        };
        if matches!(
            row.kind,
            RowKind::Category {
                expanded: true,
                ..
            }
        ) && self.is_expanded(&row.id)
        {
            self.collapse(&row.id);
            return;
        }

        let Some(parent) = self.index.parent(&row.id).map(str::to_string) else {
            return;
        };
        if let Some(pos) = self.visible_rows().iter().position(|r| r.id == parent) {
            self.cursor = pos;
            self.render();
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.render();
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.visible_rows().len() {
            self.cursor += 1;
            self.render();
        }
    }

    /// Flattened index of the row under the cursor
    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor_row().map(|row| row.index)
    }

    fn cursor_row(&self) -> Option<VisibleRow> {
        self.visible_rows().into_iter().nth(self.cursor)
    }

    /// Rows currently drawn: the flattened order minus nodes under a
    /// collapsed category. An active search shows every flattened node.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let filtering = self.is_filtering();

        self.selection
            .order()
            .iter()
            .enumerate()
            .filter(|(_, id)| filtering || self.ancestors_expanded(id))
            .filter_map(|(i, id)| {
                let node = self.index.resolve(&self.nodes, id)?;
                let kind = match node {
                    TreeNode::Category { children, .. } => RowKind::Category {
                        expanded: filtering || self.expanded.contains(id),
                        child_count: children.len(),
                    },
                    TreeNode::Leaf { .. } => RowKind::Leaf,
                };
                Some(VisibleRow {
                    index: i,
                    id: id.clone(),
                    name: node.name().to_string(),
                    depth: self.index.depth(id),
                    kind,
                    state: self.row_state(node),
                })
            })
            .collect()
    }

    /// Draw the current state on the render target
    pub fn render(&mut self) {
        let rows = self.visible_rows();
        let search = self.options.search_enabled.then(|| SearchLine {
            query: &self.search_query,
            placeholder: &self.options.search_placeholder,
            active: self.search_editing,
        });
        let frame = render_frame(&rows, self.cursor, search, &self.icons);
        self.target.present(&frame);
    }

    /// Status and help lines drawn under the tree
    pub fn footer_lines(&self) -> Vec<String> {
        let mut lines = vec![self.icons.rule.repeat(40)];
        lines.extend(
            render_status_bar(self.selection.len(), self.index.len(), &self.icons)
                .lines()
                .map(str::to_string),
        );
        lines.push(String::new());
        lines.extend(
            render_help_bar(self.options.search_enabled)
                .lines()
                .map(str::to_string),
        );
        lines
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    fn row_state(&self, node: &TreeNode) -> SelectionState {
        if self.selection.is_selected(node.id()) {
            return SelectionState::Selected;
        }
        let any_descendant = node
            .descendant_ids()
            .iter()
            .any(|id| self.selection.is_selected(id));
        if any_descendant {
            SelectionState::Partial
        } else {
            SelectionState::Unselected
        }
    }

    fn ancestors_expanded(&self, id: &str) -> bool {
        self.index
            .ancestors(id)
            .iter()
            .all(|ancestor| self.expanded.contains(ancestor))
    }

    fn is_category(&self, id: &str) -> bool {
        self.index
            .resolve(&self.nodes, id)
            .is_some_and(TreeNode::is_category)
    }

    fn category_ids(&self) -> HashSet<String> {
        self.index
            .preorder()
            .iter()
            .filter(|id| self.is_category(id))
            .cloned()
            .collect()
    }

    fn id_range(&self, from: usize, to: usize) -> Vec<String> {
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        self.selection.order()[lo..=hi].to_vec()
    }

    fn clamp_cursor(&mut self) {
        let rows = self.visible_rows().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    /// Cascade over the touched ids, redraw, notify
    fn commit(&mut self, touched: Vec<String>) {
        if self.options.cascade_select_children {
            for id in &touched {
                let Some(node) = self.index.resolve(&self.nodes, id) else {
                    continue;
                };
                if !node.is_category() {
                    continue;
                }
                let descendants = node.descendant_ids();
                let selected = self.selection.is_selected(id);
                trace!(id = %id, descendants = descendants.len(), selected, "cascade");
                if selected {
                    self.selection.insert_ids(descendants);
                } else {
                    self.selection.remove_ids(descendants.iter());
                }
            }
        }

        debug!(
            selected = self.selection.len(),
            touched = touched.len(),
            "selection committed"
        );
        self.render();

        if self.on_change.is_some() {
            let selected = self.selected_nodes();
            if let Some(callback) = self.on_change.as_mut() {
                callback(&selected);
            }
        }
    }
}
