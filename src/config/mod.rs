//! Configuration module for labeltree
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LABELTREE_*)
//! 3. Working directory config (./labeltree.toml)
//! 4. User config (~/.config/labeltree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{parse_with_warnings, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, TreeConfig, Verbosity};
