//! In-memory key/value store
//!
//! A single owned mapping from key to value. Absence of a key is a distinct
//! state from an empty value. Every mutator returns the pre-image of the key
//! so callers can build undo records from it.
//!
//! # Design
//!
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - No ordering guarantees on iteration
//! - `count_equal` is a linear scan over all entries

use rustc_hash::FxHashMap;

/// The key/value mapping under management.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    entries: FxHashMap<String, String>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored under `key`, if any
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or overwrite `key`.
    ///
    /// Returns the previous value, `None` if the key did not exist.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove `key`.
    ///
    /// Returns the removed value, `None` (and no change) if the key was absent.
    pub fn unset(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Number of keys currently mapped to exactly `value`
    pub fn count_equal(&self, value: &str) -> usize {
        self.entries.values().filter(|v| v.as_str() == value).count()
    }

    /// Whether `key` is present
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys in the store
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
