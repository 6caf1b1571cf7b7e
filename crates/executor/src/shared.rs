//! Shared executor handle for multi-threaded hosts.
//!
//! The store and the transaction stack form one shared mutable resource:
//! transaction state spans several sequential commands, so another session's
//! commands must not interleave with an open block. [`SharedExecutor`] puts a
//! single mutex around the whole begin/add/execute/rollback/commit path.
//!
//! # Usage
//!
//! ```ignore
//! use nestkv_executor::SharedExecutor;
//!
//! let shared = SharedExecutor::new();
//!
//! // One command at a time
//! shared.execute_line("SET a 1")?;
//!
//! // A whole block without interleaving
//! let mut session = shared.lock();
//! session.execute_line("BEGIN")?;
//! session.execute_line("SET a 2")?;
//! session.execute_line("COMMIT")?;
//! ```

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::{Executor, Output, Request, Result};

/// Cloneable, thread-safe handle to one [`Executor`].
#[derive(Debug, Clone, Default)]
pub struct SharedExecutor {
    inner: Arc<Mutex<Executor>>,
}

impl SharedExecutor {
    /// Create a handle to a fresh executor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing executor.
    pub fn from_executor(executor: Executor) -> Self {
        Self {
            inner: Arc::new(Mutex::new(executor)),
        }
    }

    /// Parse and execute one line while holding the lock.
    pub fn execute_line(&self, line: &str) -> Result<Output> {
        self.inner.lock().execute_line(line)
    }

    /// Execute one request while holding the lock.
    pub fn execute(&self, request: Request) -> Result<Output> {
        self.inner.lock().execute(request)
    }

    /// Take the lock for a sequence of commands.
    ///
    /// Other handles block until the guard is dropped.
    pub fn lock(&self) -> MutexGuard<'_, Executor> {
        self.inner.lock()
    }
}

impl From<Executor> for SharedExecutor {
    fn from(executor: Executor) -> Self {
        Self::from_executor(executor)
    }
}
