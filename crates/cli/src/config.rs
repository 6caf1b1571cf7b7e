//! Shell configuration via `nestkv.toml`
//!
//! Settings are read once at startup. Lookup order: the `--config` path if
//! given, else `$HOME/.nestkv.toml` if it exists, else built-in defaults.
//! Command-line flags override whatever the file says.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::OutputMode;

/// Default config file name looked up in `$HOME`.
pub const CONFIG_FILE_NAME: &str = ".nestkv.toml";

/// Default history file name looked up in `$HOME`.
pub const HISTORY_FILE_NAME: &str = ".nestkv_history";

/// Errors raised while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys / bad values
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Shell configuration loaded from `nestkv.toml`.
///
/// # Example
///
/// ```toml
/// output = "raw"
/// prompt = ">> "
/// log = "warn"
/// # history_file = "/home/me/.nestkv_history"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output mode: "raw" (default), "human" or "json"
    #[serde(default)]
    pub output: OutputMode,
    /// REPL prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// REPL history file; `$HOME/.nestkv_history` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_file: Option<PathBuf>,
    /// Log filter directive (tracing `EnvFilter` syntax)
    #[serde(default = "default_log")]
    pub log: String,
}

fn default_prompt() -> String {
    ">> ".to_string()
}

fn default_log() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputMode::default(),
            prompt: default_prompt(),
            history_file: None,
            log: default_log(),
        }
    }
}

impl Config {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# nestkv shell configuration
#
# Output mode: "raw" (default), "human" or "json"
#   "raw"   = the line protocol: values, NULL, counts, NO TRANSACTION
#   "human" = redis-style: "value", (nil), (integer) 2, errors on stderr
#   "json"  = one JSON object per line
output = "raw"

# REPL prompt. The open transaction depth is shown in front of it.
prompt = ">> "

# Log filter, tracing EnvFilter syntax (default: "warn").
# Overridden by NESTKV_LOG and --log.
log = "warn"

# REPL history file (default: $HOME/.nestkv_history)
# history_file = "/path/to/history"
"#
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load from an explicit path, or from `$HOME/.nestkv.toml` if present.
    ///
    /// An explicit path must exist; the home file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match home_file(CONFIG_FILE_NAME) {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// History file to use, falling back to `$HOME/.nestkv_history`.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| home_file(HISTORY_FILE_NAME))
    }
}

fn home_file(name: &str) -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(name))
}
