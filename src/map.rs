//! Ordered, case-insensitive map for INI tables.
//!
//! This module provides [`IniMap`], the associative container behind every
//! table's values and child tables. It wraps [`BTreeMap`] with a key type
//! whose ordering folds ASCII case, so that:
//!
//! - **Lookups are case-insensitive**: `map.get("Key")` and `map.get("KEY")`
//!   find the same entry
//! - **Iteration is sorted**: entries come back in ascending
//!   case-insensitive key order, deterministically
//! - **Spelling is preserved**: the key keeps the spelling of its first
//!   insertion
//!
//! One generic container serves both kinds of store a table owns — values
//! and nested tables share a single comparison and insertion path, only the
//! payload type differs.
//!
//! ## Examples
//!
//! ```rust
//! use inicfg::IniMap;
//!
//! let mut map = IniMap::new();
//! map.insert("Port", 8080);
//! map.insert("host", 1);
//!
//! assert_eq!(map.get("PORT"), Some(&8080));
//!
//! // Iteration is sorted case-insensitively, not by insertion order.
//! let keys: Vec<&str> = map.keys().collect();
//! assert_eq!(keys, ["host", "Port"]);
//! ```

use std::cmp::Ordering;
use std::collections::{btree_map, BTreeMap};

/// A map key that compares byte-wise with ASCII case folded.
///
/// The ordering is equivalent in sign to a case-insensitive lexicographic
/// comparison of the two keys as plain strings, which is the contract the
/// rest of the crate relies on for lookup and iteration order.
#[derive(Debug, Clone)]
struct KeyString(String);

impl KeyString {
    fn as_str(&self) -> &str {
        &self.0
    }

    fn folded_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b.to_ascii_uppercase())
    }
}

impl Ord for KeyString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded_bytes().cmp(other.folded_bytes())
    }
}

impl PartialOrd for KeyString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for KeyString {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for KeyString {}

impl From<&str> for KeyString {
    fn from(key: &str) -> Self {
        KeyString(key.to_string())
    }
}

/// An ordered map of string keys to INI payloads, compared
/// case-insensitively.
///
/// Within one map, keys are unique under case-insensitive comparison. The
/// payload type is generic: a table stores one `IniMap` of values and one
/// of child tables.
///
/// # Examples
///
/// ```rust
/// use inicfg::IniMap;
///
/// let mut map = IniMap::new();
/// map.insert("name", "value");
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get("NAME"), Some(&"value"));
/// ```
#[derive(Debug, Clone)]
pub struct IniMap<T>(BTreeMap<KeyString, T>);

impl<T> IniMap<T> {
    /// Creates an empty `IniMap`.
    #[must_use]
    pub fn new() -> Self {
        IniMap(BTreeMap::new())
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained the key under any casing, the old value
    /// is replaced and returned; the stored key keeps its original spelling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::IniMap;
    ///
    /// let mut map = IniMap::new();
    /// assert!(map.insert("Key", 1).is_none());
    /// assert_eq!(map.insert("KEY", 2), Some(1));
    /// assert_eq!(map.keys().collect::<Vec<_>>(), ["Key"]);
    /// ```
    pub fn insert(&mut self, key: &str, value: T) -> Option<T> {
        self.0.insert(KeyString::from(key), value)
    }

    /// Returns a reference to the value for `key`, compared
    /// case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.0.get(&KeyString::from(key))
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.0.get_mut(&KeyString::from(key))
    }

    /// Returns the entry for `key`, inserting a default payload first if
    /// the key is absent.
    ///
    /// This is the single insertion path used both to record values and to
    /// materialize newly addressed sections during parsing.
    pub fn get_or_create(&mut self, key: &str) -> &mut T
    where
        T: Default,
    {
        self.0.entry(KeyString::from(key)).or_default()
    }

    /// Returns `true` if the map contains `key` under any casing.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(&KeyString::from(key))
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a fresh iterator over the entries in ascending
    /// case-insensitive key order.
    ///
    /// The iterator yields `None` once exhausted; restart by calling
    /// `iter` again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::IniMap;
    ///
    /// let mut map = IniMap::new();
    /// map.insert("b", 2);
    /// map.insert("A", 1);
    ///
    /// let entries: Vec<(&str, &i32)> = map.iter().collect();
    /// assert_eq!(entries, [("A", &1), ("b", &2)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.0.iter())
    }

    /// Returns an iterator over the keys in ascending case-insensitive
    /// order, with their original spelling.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(KeyString::as_str)
    }
}

impl<T> Default for IniMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a IniMap<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of an [`IniMap`] in sorted key order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T>(btree_map::Iter<'a, KeyString, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.0.len()
    }
}
