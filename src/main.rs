//! labeltree CLI - hierarchical label picker and request builder
//!
//! Usage: labeltree <COMMAND>
//!
//! Commands:
//!   tree      Print a label tree
//!   select    Pick labels interactively
//!   download  Build a download request from a selection
//!   delete    List delete requests for a selection
//!   modify    Build a rename/move request
//!   create    Build a create request
//!   summary   Summarise a selection
//!   history   Render batch history

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use labeltree::config::{Config, ConfigWarning, Verbosity};
use labeltree::presentation::{Cli, Commands};
use labeltree::ui::UiContext;

mod commands;

use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = load_config(cli.config.as_deref())?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    init_logging(ui.verbosity);
    for warning in &warnings {
        warn!("{}", warning);
    }

    let session = Session { config, ui };

    match cli.command {
        Commands::Tree {
            data,
            query,
            expanded,
            backend,
        } => commands::tree::cmd_tree(&session, &data, query.as_deref(), expanded, backend),
        Commands::Select {
            data,
            backend,
            single,
            no_cascade,
        } => commands::select::cmd_select(&session, &data, backend, single, no_cascade),
        Commands::Download {
            selection,
            count,
            non_match_images,
        } => commands::labels::cmd_download(&session, &selection, count, non_match_images),
        Commands::Delete { selection } => commands::labels::cmd_delete(&session, &selection),
        Commands::Modify {
            selection,
            name,
            super_category,
        } => commands::labels::cmd_modify(&session, &selection, &name, super_category.as_deref()),
        Commands::Create {
            name,
            is_super,
            parent,
        } => commands::labels::cmd_create(&session, &name, is_super, parent.as_deref()),
        Commands::Summary { selection } => commands::labels::cmd_summary(&session, &selection),
        Commands::History { file, kind } => commands::history::cmd_history(&session, &file, kind),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => Config::load_with_warnings(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("failed to read working directory")?;
            Config::load_or_default(Some(&cwd))
        }
    };
    Ok((config.with_env_overrides(), warnings))
}

/// `RUST_LOG` wins; otherwise the verbosity picks the level
fn init_logging(verbosity: Verbosity) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
