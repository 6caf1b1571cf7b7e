//! Output enum for command execution results.
//!
//! Every request produces exactly one output variant. `Display` renders the
//! protocol text a client prints: nothing for mutations and transaction
//! control, the value or `NULL` for `GET`, a decimal count for `NUMEQUALTO`.

use std::fmt;

use serde::{Deserialize, Serialize};

use nestkv_core::{Reply, NULL};

use crate::help::HELP_TEXT;

/// Successful request results.
///
/// # Example
///
/// ```ignore
/// use nestkv_executor::{Executor, Output};
///
/// match executor.execute_line("GET a")? {
///     Output::Value(Some(v)) => println!("{}", v),
///     Output::Value(None) => println!("NULL"),
///     _ => unreachable!("GET always returns Value"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// No printable result (SET, UNSET, BEGIN, ROLLBACK, COMMIT, no-op)
    Unit,

    /// Result of GET; `None` when the key is not set
    Value(Option<String>),

    /// Result of NUMEQUALTO
    Count(u64),

    /// The command listing was requested
    Help,

    /// END: the caller should close the session
    Terminate,
}

impl Output {
    /// Whether the caller should end the session
    pub fn is_terminate(&self) -> bool {
        matches!(self, Output::Terminate)
    }

    /// Whether there is nothing to print
    pub fn is_empty(&self) -> bool {
        matches!(self, Output::Unit | Output::Terminate)
    }
}

impl From<Reply> for Output {
    fn from(reply: Reply) -> Self {
        match reply {
            Reply::None => Output::Unit,
            Reply::Value(value) => Output::Value(value),
            Reply::Count(n) => Output::Count(n as u64),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Unit | Output::Terminate => Ok(()),
            Output::Value(Some(value)) => f.write_str(value),
            Output::Value(None) => f.write_str(NULL),
            Output::Count(n) => write!(f, "{}", n),
            Output::Help => f.write_str(HELP_TEXT),
        }
    }
}
