//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands. Positional inputs accept `-` for stdin.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryKind {
    #[default]
    Download,
    Upload,
}

/// labeltree - hierarchical label picker and request builder
#[derive(Parser, Debug)]
#[command(name = "labeltree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./labeltree.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a label tree
    Tree {
        /// Tree JSON file, or - for stdin
        data: PathBuf,

        /// Show only names matching this filter (plus their parents)
        #[arg(long)]
        query: Option<String>,

        /// Expand every category
        #[arg(long)]
        expanded: bool,

        /// Input is the backend label listing ({id, name, categories})
        #[arg(long)]
        backend: bool,
    },

    /// Pick labels interactively and print the selection as JSON
    Select {
        /// Tree JSON file, or - for stdin
        data: PathBuf,

        /// Input is the backend label listing ({id, name, categories})
        #[arg(long)]
        backend: bool,

        /// Every click replaces the selection
        #[arg(long)]
        single: bool,

        /// Selecting a category does not select its children
        #[arg(long)]
        no_cascade: bool,
    },

    /// Build the download request body for a selection
    Download {
        /// Selection JSON (as printed by `select`), or - for stdin
        selection: PathBuf,

        /// Number of images to download (1-10000)
        #[arg(long)]
        count: u32,

        /// Also include images without a matching annotation
        #[arg(long)]
        non_match_images: bool,
    },

    /// List the requests that delete the selected labels
    Delete {
        /// Selection JSON, or - for stdin
        selection: PathBuf,
    },

    /// Build the rename/move request for one selected label
    Modify {
        /// Selection JSON, or - for stdin
        selection: PathBuf,

        /// New name
        #[arg(long)]
        name: String,

        /// New parent super category id (categories only)
        #[arg(long = "super-category", value_name = "ID")]
        super_category: Option<String>,
    },

    /// Build the request that creates a label or a super category
    Create {
        /// Name of the new label
        name: String,

        /// Create a super category instead of a category
        #[arg(long = "super", conflicts_with = "parent")]
        is_super: bool,

        /// Super category the new category belongs to
        #[arg(long, value_name = "ID")]
        parent: Option<String>,
    },

    /// Summarise a selection the way the admin page does
    Summary {
        /// Selection JSON, or - for stdin
        selection: PathBuf,
    },

    /// Render an upload or download batch history
    History {
        /// History JSON file, or - for stdin
        file: PathBuf,

        #[arg(long, value_enum, default_value = "download")]
        kind: HistoryKind,
    },
}
