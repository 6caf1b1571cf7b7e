//! The Executor - single entry point to the transactional core.
//!
//! The Executor owns one [`Store`] and one [`TransactionStack`] and routes each
//! request to them:
//!
//! - `SET` / `UNSET` build a core command, register it with the innermost open
//!   transaction (if any) and then execute it
//! - `GET` / `NUMEQUALTO` execute immediately and are never registered
//! - `BEGIN` / `ROLLBACK` / `COMMIT` delegate to the transaction stack
//! - `END` is returned as [`Output::Terminate`]; the caller decides what ending
//!   the session means
//!
//! It performs no I/O.

use nestkv_core::{Command, Store, TransactionStack};
use tracing::trace;

use crate::{Output, Request, Result};

/// The command executor.
///
/// # Thread Safety
///
/// Executor requires `&mut self` for every request. Wrap it in a
/// [`SharedExecutor`](crate::SharedExecutor) to share it between threads.
///
/// # Example
///
/// ```ignore
/// use nestkv_executor::{Executor, Output};
///
/// let mut executor = Executor::new();
/// executor.execute_line("SET a 10")?;
/// executor.execute_line("BEGIN")?;
/// executor.execute_line("SET a 20")?;
/// executor.execute_line("ROLLBACK")?;
/// assert_eq!(executor.execute_line("GET a")?, Output::Value(Some("10".into())));
/// ```
#[derive(Debug, Default)]
pub struct Executor {
    store: Store,
    transactions: TransactionStack,
}

impl Executor {
    /// Create an executor with an empty store and no open transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor over an existing store.
    pub fn with_store(store: Store) -> Self {
        Self {
            store,
            transactions: TransactionStack::new(),
        }
    }

    /// Parse and execute one line of input.
    pub fn execute_line(&mut self, line: &str) -> Result<Output> {
        let request = Request::parse(line)?;
        self.execute(request)
    }

    /// Execute a single request.
    ///
    /// Returns the request result or an error. Errors never leave the store
    /// or the transaction stack partially modified.
    pub fn execute(&mut self, request: Request) -> Result<Output> {
        trace!(
            command = request.keyword(),
            mutating = request.is_mutating(),
            depth = self.depth(),
            "execute"
        );

        match request {
            Request::Begin => {
                self.transactions.begin();
                Ok(Output::Unit)
            }
            Request::Rollback => {
                self.transactions.rollback(&mut self.store)?;
                Ok(Output::Unit)
            }
            Request::Commit => {
                self.transactions.commit()?;
                Ok(Output::Unit)
            }
            Request::End => Ok(Output::Terminate),
            Request::Help => Ok(Output::Help),
            Request::Noop => Ok(Output::Unit),
            Request::Set { key, value } => Ok(self.apply(Command::set(key, value))),
            Request::Unset { key } => Ok(self.apply(Command::unset(key))),
            Request::Get { key } => Ok(self.apply(Command::get(key))),
            Request::NumEqualTo { value } => Ok(self.apply(Command::count_equal(value))),
        }
    }

    /// Execute `lines` in order, stopping after `END`.
    ///
    /// Errors do not stop the run; every line gets its own result.
    pub fn execute_many<'a, I>(&mut self, lines: I) -> Vec<Result<Output>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut results = Vec::new();
        for line in lines {
            let result = self.execute_line(line);
            let done = matches!(result, Ok(Output::Terminate));
            results.push(result);
            if done {
                break;
            }
        }
        results
    }

    /// Read-only view of the store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Current transaction nesting depth
    pub fn depth(&self) -> usize {
        self.transactions.depth()
    }

    /// Whether a transaction is open
    pub fn in_transaction(&self) -> bool {
        self.transactions.in_transaction()
    }

    /// Undo logs of the open transactions, outermost first
    pub fn undo_log(&self) -> Vec<&[Command]> {
        self.transactions
            .transactions()
            .iter()
            .map(|tx| tx.commands())
            .collect()
    }

    fn apply(&mut self, cmd: Command) -> Output {
        self.transactions.apply(&mut self.store, cmd).into()
    }
}
