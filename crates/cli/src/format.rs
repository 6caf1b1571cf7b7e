//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Raw** (default): the line protocol, e.g. `10`, `NULL`, `2`, `NO TRANSACTION`
//! - **Human** (`--human`): Redis-style, e.g. `"10"`, `(nil)`, `(integer) 2`
//! - **JSON** (`--json`): one `serde_json` object per line

use serde::{Deserialize, Serialize};

use nestkv_executor::{Error, Output, HELP_TEXT};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Human,
    Json,
    #[default]
    Raw,
}

/// Format a successful output. An empty string means print nothing.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::json!({ "error": err.to_string() }).to_string(),
        OutputMode::Raw => err.to_string(),
        OutputMode::Human => format!("(error) {}", err),
    }
}

/// Whether errors belong on stdout in this mode.
///
/// Raw mode is the line protocol, where `NO TRANSACTION` is part of the
/// output stream.
pub fn errors_on_stdout(mode: OutputMode) -> bool {
    !matches!(mode, OutputMode::Human)
}

// =========================================================================
// JSON mode
// =========================================================================

fn format_json(output: &Output) -> String {
    let value = match output {
        Output::Unit | Output::Terminate => return String::new(),
        Output::Value(v) => serde_json::json!({ "value": v }),
        Output::Count(n) => serde_json::json!({ "count": n }),
        Output::Help => serde_json::json!({ "help": HELP_TEXT }),
    };
    value.to_string()
}

// =========================================================================
// Raw mode
// =========================================================================

fn format_raw(output: &Output) -> String {
    output.to_string()
}

// =========================================================================
// Human mode
// =========================================================================

fn format_human(output: &Output) -> String {
    match output {
        Output::Unit => "OK".to_string(),
        Output::Terminate => String::new(),
        Output::Value(None) => "(nil)".to_string(),
        Output::Value(Some(v)) => format!("\"{}\"", v),
        Output::Count(n) => format!("(integer) {}", n),
        Output::Help => HELP_TEXT.to_string(),
    }
}
