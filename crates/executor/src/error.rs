//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **User-visible**: the `Display` text is what a client prints
//! - **Non-fatal**: the caller keeps accepting commands afterwards
//! - **Side-effect free**: no error leaves the store or transaction stack
//!   partially mutated

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// | Variant | Raised by | State change |
/// |---------|-----------|--------------|
/// | `NotEnoughArguments` | `SET`, `GET`, `UNSET`, `NUMEQUALTO` | none |
/// | `NoTransaction` | `ROLLBACK`, `COMMIT` | none |
/// | `UnknownCommand` | unrecognized keyword | none |
///
/// # Example
///
/// ```ignore
/// use nestkv_executor::{Error, Executor};
///
/// match executor.execute_line("ROLLBACK") {
///     Ok(output) => println!("{}", output),
///     Err(Error::NoTransaction) => println!("NO TRANSACTION"),
///     Err(e) => println!("{}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// Fewer arguments than the command requires
    #[error("not enough arguments for {command}: expected {expected}, got {given}")]
    NotEnoughArguments {
        /// Uppercased command keyword
        command: String,
        /// Minimum number of arguments
        expected: usize,
        /// Number of arguments supplied
        given: usize,
    },

    /// `ROLLBACK` or `COMMIT` with no open transaction
    #[error("NO TRANSACTION")]
    NoTransaction,

    /// Unrecognized command keyword
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// Uppercased offending token
        command: String,
    },
}

impl From<nestkv_core::Error> for Error {
    fn from(e: nestkv_core::Error) -> Self {
        match e {
            nestkv_core::Error::NoTransaction => Error::NoTransaction,
        }
    }
}
