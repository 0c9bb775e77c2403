use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

/// Unbounded mapping from key to observation count.
///
/// One entry per distinct key ever observed; entries are never evicted,
/// only `clear` empties the map. Unbounded growth is the accepted trade
/// for exact counts.
pub(crate) struct FrequencyStore<T> {
    counts: HashMap<T, u64, RandomState>,
}

impl<T: Hash + Eq> FrequencyStore<T> {
    pub(crate) fn new() -> Self {
        Self {
            counts: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Records one observation of `key`, creating the entry at count 1 on
    /// first sight. Returns the updated count.
    pub(crate) fn increment(&mut self, key: T) -> u64 {
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    /// Count for `key`, 0 if never observed.
    pub(crate) fn get<Q>(&self, key: &Q) -> u64
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Like `get`, but distinguishes a missing entry from a real count.
    pub(crate) fn lookup(&self, key: &T) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Number of distinct keys observed.
    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.counts.clear();
    }
}
