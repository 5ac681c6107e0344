//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{LabelTreeError, LabelTreeResult};

use super::types::{Config, Verbosity};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "labeltree.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LabelTreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for messages.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> LabelTreeResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LabelTreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `<work_dir>/labeltree.toml`, then the user config, then
/// defaults. Environment overrides are applied last.
///
/// A config file that fails to parse is skipped with a warning log.
pub fn load_or_default(work_dir: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let mut candidates = Vec::new();
    if let Some(dir) = work_dir {
        candidates.push(dir.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_dir) = dirs_config_dir() {
        candidates.push(user_dir.join("labeltree/config.toml"));
    }

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                tracing::debug!(path = %path.display(), "loaded config");
                return (with_env_overrides(config), warnings);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring config file");
            }
        }
    }

    (with_env_overrides(Config::default()), Vec::new())
}

/// Apply environment variable overrides (LABELTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(val) = get_env("LABELTREE_CASCADE") {
        config.tree.cascade_select_children = parse_flag(&val);
    }

    if let Some(val) = get_env("LABELTREE_MULTI_SELECT") {
        config.tree.multi_select = parse_flag(&val);
    }

    if let Some(val) = get_env("LABELTREE_UNICODE") {
        config.output.unicode = parse_flag(&val);
    }

    if let Some(verbosity) = get_env("LABELTREE_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn parse_flag(val: &str) -> bool {
    let v = val.trim().to_lowercase();
    v != "false" && v != "0" && v != "no" && v != "off"
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tree",
        "search_enabled",
        "search_placeholder",
        "initially_expanded",
        "multi_select",
        "cascade_select_children",
        "output",
        "verbosity",
        "color",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
