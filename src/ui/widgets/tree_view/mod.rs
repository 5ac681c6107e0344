//! Interactive tree view for picking labels.
//!
//! Provides a hierarchical multi-select with cascade, shift/ctrl click
//! semantics and a name filter. Rendering goes through an injected
//! [`RenderTarget`], so the same view drives the terminal and the tests.
//!
//! # Example
//!
//! ```
//! use labeltree::domain::entities::TreeNode;
//! use labeltree::ui::widgets::tree_view::{ClickModifiers, MemoryTarget, TreeView, TreeViewOptions};
//!
//! let data = vec![TreeNode::category("1", "2025")
//!     .with_child(TreeNode::leaf("1.1", "coral"))
//!     .with_child(TreeNode::leaf("1.2", "algae"))];
//!
//! let mut view = TreeView::new(MemoryTarget::new(), data, TreeViewOptions::default());
//! view.handle_click(0, ClickModifiers::NONE);
//!
//! let selected = view.selected_nodes();
//! let ids: Vec<&str> = selected.iter().map(|n| n.id()).collect();
//! assert_eq!(ids, ["1", "1.1", "1.2"]);
//! ```

mod input;
mod render;
mod target;
mod view;

pub use input::{
    apply_action, apply_search_key, key_to_action, mouse_to_click, run_interactive, TreeAction,
};
pub use render::{render_help_bar, render_row, render_status_bar, truncate_to_width};
pub use target::{Frame, MemoryTarget, RenderTarget, TerminalTarget, Viewport};
pub use view::{
    ClickModifiers, RowKind, SelectionState, TreeView, TreeViewOptions, VisibleRow,
};
