//! The record of results a wrapper has already handed out.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Mapping from composite (arguments, result) key to an accepted result.
///
/// A store can be handed to [`UniqueOptions::with_store`](super::UniqueOptions::with_store)
/// to pre-seed a wrapper: every key it contains counts as already seen. Only
/// the wrapper that owns a store adds entries to it.
///
/// Stores serialize as a plain JSON object, so the state of one wrapper can
/// be exported with [`Unique::into_store`](super::Unique::into_store) and
/// imported into another.
///
/// # Examples
///
/// ```rust
/// use unique_callback::Store;
///
/// let store: Store<i32> = serde_json::from_str(r#"{"[]1": 1}"#).unwrap();
/// assert!(store.contains_key("[]1"));
/// assert_eq!(store.get("[]1"), Some(&1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store<T> {
    entries: HashMap<String, T>,
}

impl<T> Store<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Number of recorded results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` has already been seen.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the result recorded under `key`.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Iterate over `(key, result)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn insert(&mut self, key: String, value: T) {
        self.entries.insert(key, value);
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Store<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<T> From<HashMap<String, T>> for Store<T> {
    fn from(entries: HashMap<String, T>) -> Self {
        Self { entries }
    }
}

impl<T> From<BTreeMap<String, T>> for Store<T> {
    fn from(entries: BTreeMap<String, T>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, T, const N: usize> From<[(K, T); N]> for Store<T> {
    fn from(entries: [(K, T); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store: Store<u8> = Store::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(!store.contains_key("[]1"));
    }

    #[test]
    fn test_import_from_maps() {
        let mut hashed = HashMap::new();
        hashed.insert("a".to_string(), 1);
        let mut sorted = BTreeMap::new();
        sorted.insert("a".to_string(), 1);

        assert_eq!(Store::from(hashed), Store::from(sorted));
        assert_eq!(Store::from([("a", 1)]).get("a"), Some(&1));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let store = Store::from([("[]\"x\"", "x".to_string())]);
        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"{"[]\"x\"":"x"}"#);

        let back: Store<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn test_iter_visits_every_entry() {
        let store = Store::from([("a", 1), ("b", 2)]);
        let mut seen: Vec<_> = store.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        seen.sort();
        assert_eq!(seen, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
    }
}
