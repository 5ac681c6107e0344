//! Terminal presentation: capability detection, theme, the tree view widget
//! and the history tables.

pub mod context;
pub mod style;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

pub use context::UiContext;
