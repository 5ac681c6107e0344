//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Reading command inputs (files or stdin)
//! - Output formatting (text/JSON)

pub mod cli;
pub mod input;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands, HistoryKind};
pub use input::read_source;
pub use output::print_json;
