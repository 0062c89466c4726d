//! Process-lifetime memoization keyed by a simple parameter (locale code,
//! TOC mode, ...).
//!
//! The first successful computation for a key is kept until [`MemoCache::clear`]
//! or [`MemoCache::remove`]. Failed computations are not cached. Access goes
//! through `&mut self`; a server handling concurrent requests would wrap the
//! cache in a `Mutex` or publish immutable snapshots instead.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct MemoCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> MemoCache<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        self.entries.entry(key).or_insert_with(compute)
    }

    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: K,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<&V, E> {
        use std::collections::hash_map::Entry;

        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(compute()?)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::MemoCache;

    #[test]
    fn first_computation_wins_until_clear() {
        let mut cache = MemoCache::<String, usize>::new();
        let mut calls = 0;
        let first = *cache.get_or_insert_with("fr".to_string(), || {
            calls += 1;
            10
        });
        let second = *cache.get_or_insert_with("fr".to_string(), || {
            calls += 1;
            20
        });
        assert_eq!((first, second, calls), (10, 10, 1));

        cache.clear();
        assert!(cache.is_empty());
        let third = *cache.get_or_insert_with("fr".to_string(), || 30);
        assert_eq!(third, 30);
    }

    #[test]
    fn failed_computation_is_not_cached() {
        let mut cache = MemoCache::<&str, u32>::new();
        let failed: Result<&u32, String> =
            cache.get_or_try_insert_with("de", || Err("missing locale".to_string()));
        assert!(failed.is_err());
        assert!(cache.get(&"de").is_none());

        let ok: Result<&u32, String> = cache.get_or_try_insert_with("de", || Ok(7));
        assert_eq!(ok.ok().copied(), Some(7));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.remove(&"de"), Some(7));
    }
}
