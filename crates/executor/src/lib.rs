//! # nestkv Executor
//!
//! The public API for nestkv - an in-memory key/value store with nested
//! transactions driven by single-line textual commands.
//!
//! This is the only crate users need to import. It provides:
//! - [`Executor`] - owns the store and transaction stack, executes one line at a time
//! - [`SharedExecutor`] - a locked handle for hosts that serve several sessions
//! - [`Request`]/[`Output`] - typed command input and result
//! - [`Error`] - user-visible, non-fatal error conditions
//!
//! ## Quick Start
//!
//! ```text
//! use nestkv_executor::{Executor, Output};
//!
//! let mut executor = Executor::new();
//! executor.execute_line("SET a 10")?;
//! executor.execute_line("BEGIN")?;
//! executor.execute_line("UNSET a")?;
//! executor.execute_line("ROLLBACK")?;
//!
//! let out = executor.execute_line("GET a")?;
//! assert_eq!(out.to_string(), "10");
//! ```
//!
//! ## Commands
//!
//! | Command | Result printed |
//! |---------|----------------|
//! | `SET k v` | nothing |
//! | `GET k` | value or `NULL` |
//! | `UNSET k` | nothing |
//! | `NUMEQUALTO v` | decimal count |
//! | `BEGIN` | nothing |
//! | `ROLLBACK` / `COMMIT` | nothing, or `NO TRANSACTION` |
//! | `END` | [`Output::Terminate`] |

#![warn(missing_docs)]

mod error;
mod executor;
mod help;
mod output;
mod request;
mod shared;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use error::Error;
pub use executor::Executor;
pub use help::HELP_TEXT;
pub use output::Output;
pub use request::Request;
pub use shared::SharedExecutor;

// Re-export core types so users don't need nestkv-core directly
pub use nestkv_core::{Command, PreImage, Reply, Store, NULL};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
