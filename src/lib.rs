//! nestkv - in-memory key/value store with nested transactions
//!
//! nestkv keeps string keys and values in memory and supports nested
//! transaction blocks. Each block records an undo log; `ROLLBACK` replays the
//! innermost log in reverse, `COMMIT` closes every open block at once.
//!
//! # Quick Start
//!
//! ```ignore
//! use nestkv::{Executor, Output};
//!
//! let mut db = Executor::new();
//! db.execute_line("SET a 10")?;
//! db.execute_line("BEGIN")?;
//! db.execute_line("SET a 20")?;
//! db.execute_line("ROLLBACK")?;
//!
//! assert_eq!(db.execute_line("GET a")?, Output::Value(Some("10".into())));
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which parses one line at a
//! time into a [`Request`] and runs it against the store and transaction
//! stack from `nestkv-core`. [`TransactionStack`] and [`Store`] are re-exported
//! for callers that want to drive the core directly.

// Re-export the public API from nestkv-executor
pub use nestkv_executor::*;

// The transaction stack, for callers that drive the core directly
pub use nestkv_core::{Transaction, TransactionStack};
