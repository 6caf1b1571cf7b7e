//! Core types for nestkv
//!
//! This crate defines the transactional mutation core:
//! - Store: the string key/value mapping under management
//! - Command: an undoable operation that captures its pre-image on execution
//! - Reply: the result a command produces
//! - Transaction: the ordered undo log of one nesting level
//! - TransactionStack: the LIFO stack of open transactions
//! - Error: core error type
//!
//! Everything here is single-threaded and synchronous. Callers that share a
//! store between sessions wrap it in their own lock.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod error;
pub mod store;
pub mod transaction;

pub use command::{Command, PreImage, Reply, NULL};
pub use error::{Error, Result};
pub use store::Store;
pub use transaction::{Transaction, TransactionStack};
