//! Lookup tables persisted across runs.
//!
//! A [`LookupTable`] is the only piece of state that outlives one run: it is
//! loaded from the previous run's output, grown with newly discovered keys,
//! and written back. Keys keep first-insertion order and existing values are
//! never overwritten by [`LookupTable::ensure`].

use indexmap::IndexMap;

/// An ordered key/value table with an opaque preamble.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LookupTable {
    /// Preamble text preceding the declarations, passed through verbatim.
    pub header: String,
    entries: IndexMap<String, String>,
}

impl LookupTable {
    /// Creates an empty table with no header.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with the given header.
    #[must_use]
    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            entries: IndexMap::new(),
        }
    }

    /// Inserts or replaces an entry. Used when loading a persisted table.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Ensures `key` exists, appending it with an empty value if absent.
    ///
    /// Returns true if the key was newly added.
    pub fn ensure(&mut self, key: &str) -> bool {
        self.ensure_with(key, String::new)
    }

    /// Ensures `key` exists, computing the value only when the key is new.
    ///
    /// Returns true if the key was newly added.
    pub fn ensure_with(&mut self, key: &str, value: impl FnOnce() -> String) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.entries.insert(key.to_string(), value());
        true
    }

    /// Looks up the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}
