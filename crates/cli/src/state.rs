//! Session wrapper with prompt context.
//!
//! Holds the `Executor` for this shell session and renders the REPL prompt,
//! which shows the open transaction depth.

use nestkv_executor::{Executor, Output, Result};

/// Wraps the executor and tracks prompt context.
pub struct SessionState {
    executor: Executor,
    prompt: String,
}

impl SessionState {
    /// Create a new SessionState with an empty store.
    pub fn new(prompt: String) -> Self {
        Self {
            executor: Executor::new(),
            prompt,
        }
    }

    /// Parse and execute one line.
    pub fn execute_line(&mut self, line: &str) -> Result<Output> {
        self.executor.execute_line(line)
    }

    /// Current transaction depth.
    pub fn depth(&self) -> usize {
        self.executor.depth()
    }

    /// Generate the REPL prompt string.
    pub fn prompt(&self) -> String {
        match self.depth() {
            0 => self.prompt.clone(),
            depth => format!("(txn:{}){}", depth, self.prompt),
        }
    }
}
