//! Undoable commands.
//!
//! A [`Command`] is one operation against the [`Store`]. Mutating variants
//! capture the pre-image of their key when executed, which is all that is
//! needed to reverse them later: each command touches exactly one key and
//! transactions only ever replay undo records in LIFO order.
//!
//! | Variant | Mutating | Reply |
//! |---------|----------|-------|
//! | `Set` | yes | `Reply::None` |
//! | `Unset` | yes | `Reply::None` |
//! | `Get` | no | `Reply::Value` |
//! | `CountEqual` | no | `Reply::Count` |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::Store;

/// Text printed for a key that is not set.
pub const NULL: &str = "NULL";

/// State of a key immediately before a mutating command ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreImage {
    /// The command has not been executed yet.
    #[default]
    Pending,
    /// The key did not exist.
    Absent,
    /// The key held this value.
    Present(String),
}

impl From<Option<String>> for PreImage {
    fn from(previous: Option<String>) -> Self {
        match previous {
            Some(value) => PreImage::Present(value),
            None => PreImage::Absent,
        }
    }
}

/// Result of executing a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// Nothing to print (mutations)
    #[default]
    None,
    /// Value lookup; `None` when the key is not set
    Value(Option<String>),
    /// Number of matching keys
    Count(usize),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::None => Ok(()),
            Reply::Value(Some(value)) => f.write_str(value),
            Reply::Value(None) => f.write_str(NULL),
            Reply::Count(n) => write!(f, "{}", n),
        }
    }
}

/// One executable operation with an optional undo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Insert or overwrite `key`.
    Set {
        /// Target key
        key: String,
        /// New value
        value: String,
        /// Captured on execution
        #[serde(default)]
        prior: PreImage,
    },

    /// Remove `key`.
    Unset {
        /// Target key
        key: String,
        /// Captured on execution
        #[serde(default)]
        prior: PreImage,
    },

    /// Look up `key`.
    Get {
        /// Target key
        key: String,
    },

    /// Count keys currently mapped to `value`.
    CountEqual {
        /// Value to match exactly
        value: String,
    },
}

impl Command {
    /// Build a `Set` command
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Command::Set {
            key: key.into(),
            value: value.into(),
            prior: PreImage::Pending,
        }
    }

    /// Build an `Unset` command
    pub fn unset(key: impl Into<String>) -> Self {
        Command::Unset {
            key: key.into(),
            prior: PreImage::Pending,
        }
    }

    /// Build a `Get` command
    pub fn get(key: impl Into<String>) -> Self {
        Command::Get { key: key.into() }
    }

    /// Build a `CountEqual` command
    pub fn count_equal(value: impl Into<String>) -> Self {
        Command::CountEqual {
            value: value.into(),
        }
    }

    /// Whether this command changes the store (and so carries undo state)
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Set { .. } | Command::Unset { .. })
    }

    /// Protocol keyword for this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "SET",
            Command::Unset { .. } => "UNSET",
            Command::Get { .. } => "GET",
            Command::CountEqual { .. } => "NUMEQUALTO",
        }
    }

    /// Key this command touches, `None` for `CountEqual`
    pub fn key(&self) -> Option<&str> {
        match self {
            Command::Set { key, .. } | Command::Unset { key, .. } | Command::Get { key } => {
                Some(key)
            }
            Command::CountEqual { .. } => None,
        }
    }

    /// Captured pre-image, `None` for non-mutating variants
    pub fn pre_image(&self) -> Option<&PreImage> {
        match self {
            Command::Set { prior, .. } | Command::Unset { prior, .. } => Some(prior),
            Command::Get { .. } | Command::CountEqual { .. } => None,
        }
    }

    /// Run the command against `store`, recording the pre-image if mutating.
    pub fn execute(&mut self, store: &mut Store) -> Reply {
        match self {
            Command::Set { key, value, prior } => {
                *prior = store.set(key.clone(), value.clone()).into();
                Reply::None
            }
            Command::Unset { key, prior } => {
                *prior = store.unset(key).into();
                Reply::None
            }
            Command::Get { key } => Reply::Value(store.get(key).map(str::to_owned)),
            Command::CountEqual { value } => Reply::Count(store.count_equal(value)),
        }
    }

    /// Restore `store` to its state before [`execute`](Self::execute).
    ///
    /// No-op for non-mutating variants and for commands that never ran.
    pub fn undo(&self, store: &mut Store) {
        match self {
            Command::Set { key, prior, .. } => match prior {
                PreImage::Present(previous) => {
                    store.set(key.clone(), previous.clone());
                }
                PreImage::Absent => {
                    store.unset(key);
                }
                PreImage::Pending => {}
            },
            Command::Unset { key, prior } => {
                if let PreImage::Present(previous) = prior {
                    store.set(key.clone(), previous.clone());
                }
            }
            Command::Get { .. } | Command::CountEqual { .. } => {}
        }
    }
}
