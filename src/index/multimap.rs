//! Multimap with ordered values

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Key → values in the order they were pushed
#[derive(Debug, Clone)]
pub struct OrderedMultiMap<K, V> {
    entries: HashMap<K, Vec<V>>,
}

impl<K, V> Default for OrderedMultiMap<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> OrderedMultiMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: K, value: V) {
        self.entries.entry(key).or_default().push(value);
    }

    /// Push unless the key already holds an equal value. Returns whether the
    /// value was added.
    pub fn push_unique(&mut self, key: K, value: V) -> bool
    where
        V: PartialEq,
    {
        if self.get(&key).contains(&value) {
            return false;
        }
        self.push(key, value);
        true
    }

    /// Values for a key; empty when the key is absent
    pub fn get<Q>(&self, key: &Q) -> &[V]
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of values across all keys
    pub fn value_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
