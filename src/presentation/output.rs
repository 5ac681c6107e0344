//! Output Rendering
//!
//! Commands either print JSON (for scripting and `--json`) or text built by
//! the ui views.

use std::io::Write;

use serde::Serialize;

use crate::domain::value_objects::ApiRequest;
use crate::error::{LabelTreeError, LabelTreeResult};

/// Pretty JSON for `value`
pub fn to_json<T: Serialize>(value: &T) -> LabelTreeResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| LabelTreeError::json("output", e))
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> LabelTreeResult<()> {
    let json = to_json(value)?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", json)?;
    Ok(())
}

/// `METHOD path` per request, body indented below when present
pub fn render_requests(requests: &[ApiRequest]) -> String {
    let mut out = String::new();
    for request in requests {
        out.push_str(&request.to_string());
        out.push('\n');
        if let Some(body) = &request.body {
            out.push_str(&format!("  {}\n", body));
        }
    }
    out
}
