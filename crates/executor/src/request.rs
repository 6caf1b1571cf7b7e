//! Request enum defining every protocol command.
//!
//! A request is one already-read line of text turned into typed form. The
//! protocol is one command per line: a case-insensitive keyword followed by
//! whitespace-separated arguments, with no quoting or escaping. Keys and
//! values keep their case.
//!
//! | Keyword | Args | Mutating |
//! |---------|------|----------|
//! | `SET` | key, value | yes |
//! | `GET` | key | no |
//! | `UNSET` | key | yes |
//! | `NUMEQUALTO` | value | no |
//! | `BEGIN` / `ROLLBACK` / `COMMIT` | - | transaction control |
//! | `END` | - | terminates the session |
//! | `HELP` | - | prints the command listing |
//! | `?` | - | no-op |
//!
//! Arguments past the required count are ignored.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A parsed protocol line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// `SET key value`
    Set {
        /// Target key
        key: String,
        /// New value
        value: String,
    },

    /// `GET key`
    Get {
        /// Target key
        key: String,
    },

    /// `UNSET key`
    Unset {
        /// Target key
        key: String,
    },

    /// `NUMEQUALTO value`
    NumEqualTo {
        /// Value to count
        value: String,
    },

    /// `BEGIN`
    Begin,

    /// `ROLLBACK`
    Rollback,

    /// `COMMIT`
    Commit,

    /// `END`
    End,

    /// `HELP`
    Help,

    /// `?` or a blank line
    Noop,
}

impl Request {
    /// Parse one line of input.
    ///
    /// # Errors
    ///
    /// - [`Error::NotEnoughArguments`] when a data command lacks arguments
    /// - [`Error::UnknownCommand`] for an unrecognized keyword
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let keyword = match tokens.next() {
            Some(k) => k.to_ascii_uppercase(),
            None => return Ok(Request::Noop),
        };
        let args: Vec<&str> = tokens.collect();

        let request = match keyword.as_str() {
            "SET" => {
                require(&keyword, &args, 2)?;
                Request::Set {
                    key: args[0].to_string(),
                    value: args[1].to_string(),
                }
            }
            "GET" => {
                require(&keyword, &args, 1)?;
                Request::Get {
                    key: args[0].to_string(),
                }
            }
            "UNSET" => {
                require(&keyword, &args, 1)?;
                Request::Unset {
                    key: args[0].to_string(),
                }
            }
            "NUMEQUALTO" => {
                require(&keyword, &args, 1)?;
                Request::NumEqualTo {
                    value: args[0].to_string(),
                }
            }
            "BEGIN" => Request::Begin,
            "ROLLBACK" => Request::Rollback,
            "COMMIT" => Request::Commit,
            "END" => Request::End,
            "HELP" => Request::Help,
            "?" => Request::Noop,
            _ => return Err(Error::UnknownCommand { command: keyword }),
        };
        Ok(request)
    }

    /// Protocol keyword, uppercased
    pub fn keyword(&self) -> &'static str {
        match self {
            Request::Set { .. } => "SET",
            Request::Get { .. } => "GET",
            Request::Unset { .. } => "UNSET",
            Request::NumEqualTo { .. } => "NUMEQUALTO",
            Request::Begin => "BEGIN",
            Request::Rollback => "ROLLBACK",
            Request::Commit => "COMMIT",
            Request::End => "END",
            Request::Help => "HELP",
            Request::Noop => "?",
        }
    }

    /// Whether executing this request can change the store
    pub fn is_mutating(&self) -> bool {
        matches!(self, Request::Set { .. } | Request::Unset { .. })
    }
}

fn require(command: &str, args: &[&str], expected: usize) -> Result<()> {
    if args.len() < expected {
        return Err(Error::NotEnoughArguments {
            command: command.to_string(),
            expected,
            given: args.len(),
        });
    }
    Ok(())
}
