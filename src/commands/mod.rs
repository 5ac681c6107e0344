//! Command handlers for the labeltree binary.

use labeltree::config::Config;
use labeltree::ui::UiContext;

pub mod history;
pub mod labels;
pub mod select;
pub mod tree;

/// Resolved configuration and output settings shared by every command
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
}
