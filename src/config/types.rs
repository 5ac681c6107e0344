//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ConfigWarning;
use crate::error::LabelTreeResult;
use crate::ui::widgets::tree_view::TreeViewOptions;

use super::loader;

/// Tree widget defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    #[serde(default = "default_true")]
    pub search_enabled: bool,

    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,

    #[serde(default)]
    pub initially_expanded: bool,

    #[serde(default = "default_true")]
    pub multi_select: bool,

    #[serde(default = "default_true")]
    pub cascade_select_children: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            search_enabled: true,
            search_placeholder: default_search_placeholder(),
            initially_expanded: false,
            multi_select: true,
            cascade_select_children: true,
        }
    }
}

impl TreeConfig {
    /// Widget options for these defaults
    pub fn view_options(&self) -> TreeViewOptions {
        TreeViewOptions {
            search_enabled: self.search_enabled,
            search_placeholder: self.search_placeholder.clone(),
            initially_expanded: self.initially_expanded,
            multi_select_enabled: self.multi_select,
            cascade_select_children: self.cascade_select_children,
        }
    }
}

fn default_search_placeholder() -> String {
    "Search...".to_string()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }

    /// Raise the level by the number of `-v` flags
    pub fn bumped(self, count: u8) -> Self {
        let rank = match self {
            Self::Quiet => 0,
            Self::Normal => 1,
            Self::Verbose => 2,
            Self::Debug => 3,
        } + count as usize;
        match rank {
            0 => Self::Quiet,
            1 => Self::Normal,
            2 => Self::Verbose,
            _ => Self::Debug,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LabelTreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LabelTreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the working directory, the user config dir, or defaults
    pub fn load_or_default(work_dir: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(work_dir)
    }

    /// Apply environment variable overrides (LABELTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
