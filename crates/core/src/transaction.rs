//! Nested transactions as undo logs
//!
//! A [`Transaction`] is the ordered list of mutating commands executed while it
//! was the innermost open block. The [`TransactionStack`] holds every open
//! block; its depth is the nesting depth and an empty stack means no
//! transaction is in progress.
//!
//! # Semantics
//!
//! - `begin`: push a new empty transaction (unbounded nesting)
//! - `add_command`: append to the innermost log; dropped when nothing is open
//! - `rollback`: pop the innermost transaction and undo its log newest-first
//! - `commit`: close every open level at once, discarding all undo logs
//!
//! Rollback closes one level, commit closes all of them. Mutations applied
//! with no transaction open are permanent immediately.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::command::{Command, Reply};
use crate::error::{Error, Result};
use crate::store::Store;

/// Undo log for one nesting level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Mutating commands in the order they were applied
    commands: Vec<Command>,
}

impl Transaction {
    /// Create an empty transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `cmd` to the log and return the recorded entry
    pub fn record(&mut self, cmd: Command) -> &mut Command {
        self.commands.push(cmd);
        let last = self.commands.len() - 1;
        &mut self.commands[last]
    }

    /// Recorded commands, oldest first
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Undo every recorded command, last applied first.
    ///
    /// Returns the number of commands undone.
    pub fn rollback(self, store: &mut Store) -> usize {
        let undone = self.commands.len();
        for cmd in self.commands.iter().rev() {
            cmd.undo(store);
        }
        undone
    }
}

/// LIFO stack of open transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionStack {
    open: Vec<Transaction>,
}

impl TransactionStack {
    /// Create a stack with no open transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth
    #[inline]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Whether at least one transaction is open
    #[inline]
    pub fn in_transaction(&self) -> bool {
        !self.open.is_empty()
    }

    /// Open transactions, outermost first
    pub fn transactions(&self) -> &[Transaction] {
        &self.open
    }

    /// Open a new innermost transaction. Returns the new depth.
    pub fn begin(&mut self) -> usize {
        self.open.push(Transaction::new());
        let depth = self.open.len();
        debug!(depth, "transaction begun");
        depth
    }

    /// Register `cmd` with the innermost open transaction.
    ///
    /// Returns the recorded entry so the caller can execute it in place.
    /// Returns `None` and drops `cmd` when no transaction is open or when
    /// `cmd` does not mutate the store; there is nothing to roll back to.
    ///
    /// Callers that execute immediately after registering use [`apply`](Self::apply).
    pub fn add_command(&mut self, cmd: Command) -> Option<&mut Command> {
        if !cmd.is_mutating() {
            return None;
        }
        self.open.last_mut().map(|innermost| innermost.record(cmd))
    }

    /// Execute `cmd` against `store`, registering it first when it mutates
    /// and a transaction is open.
    pub fn apply(&mut self, store: &mut Store, mut cmd: Command) -> Reply {
        match self.open.last_mut() {
            Some(innermost) if cmd.is_mutating() => innermost.record(cmd).execute(store),
            _ => {
                if cmd.is_mutating() {
                    debug!(command = cmd.name(), "applied outside any transaction");
                }
                cmd.execute(store)
            }
        }
    }

    /// Undo and close the innermost transaction.
    ///
    /// Outer transactions stay open. Returns the number of commands undone.
    ///
    /// # Errors
    ///
    /// [`Error::NoTransaction`] when the stack is empty.
    pub fn rollback(&mut self, store: &mut Store) -> Result<usize> {
        let innermost = self.open.pop().ok_or(Error::NoTransaction)?;
        let undone = innermost.rollback(store);
        debug!(depth = self.open.len(), undone, "transaction rolled back");
        Ok(undone)
    }

    /// Close every open transaction, making all changes permanent.
    ///
    /// Returns the number of transactions closed.
    ///
    /// # Errors
    ///
    /// [`Error::NoTransaction`] when the stack is empty.
    pub fn commit(&mut self) -> Result<usize> {
        if self.open.is_empty() {
            return Err(Error::NoTransaction);
        }
        let closed = self.open.len();
        self.open.clear();
        debug!(closed, "transactions committed");
        Ok(closed)
    }
}
