//! Error types for the transactional core
//!
//! The store itself never fails; the only core failure is a transaction
//! control operation issued while no transaction is open.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the transactional core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Rollback or commit with an empty transaction stack.
    ///
    /// Neither the store nor the stack is modified when this is returned.
    #[error("NO TRANSACTION")]
    NoTransaction,
}
