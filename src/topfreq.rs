use std::borrow::Borrow;
use std::hash::Hash;

use crate::error::TopFreqError;
use crate::rank::RankList;
use crate::store::FrequencyStore;

/// Default number of keys held by the ranked view.
pub const DEFAULT_TOP_N: usize = 100;

/// Tracks how often each key has been observed and keeps a bounded,
/// rank-ordered view of the hottest keys.
///
/// Counts are exact and kept for every distinct key; only the ranked view
/// is bounded. All mutation goes through [`TopFreq::observe`], which keeps
/// the two structures consistent:
///
/// - A key seen for the first time takes a free ranked slot if one exists;
///   at capacity it is not ranked (a count of 1 can never strictly beat
///   the tracked minimum, so no comparison is made).
/// - A key already ranked triggers a full resort of the view, highest
///   count first.
/// - A key counted but not ranked challenges the tail entry, the believed
///   minimum. On a strictly greater count it takes the tail slot; the view
///   becomes fully sorted again on the next resort.
///
/// Because a displacing key holds the tail slot until then, the order
/// returned by [`TopFreq::top`] is not guaranteed to be descending at
/// every instant.
///
/// The cache is not internally synchronized; concurrent callers must wrap
/// it in a lock, since `observe` is a read-modify-write across both
/// structures.
pub struct TopFreq<T> {
    store: FrequencyStore<T>,
    rank: RankList<T>,
}

impl<T: Hash + Eq + Clone> TopFreq<T> {
    /// Creates a cache tracking the top [`DEFAULT_TOP_N`] keys.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TOP_N)
    }

    /// Creates a cache whose ranked view holds at most `capacity` keys.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "ranked view capacity must be at least 1");
        Self {
            store: FrequencyStore::new(),
            rank: RankList::with_capacity(capacity),
        }
    }

    /// Records one observation of `key`.
    ///
    /// The returned errors signal that the ranked view and the frequency
    /// store have diverged. Both are unreachable through this API and mean
    /// the cache can no longer be trusted.
    pub fn observe(&mut self, key: T) -> Result<(), TopFreqError> {
        let prior = self.store.get(&key);
        let count = self.store.increment(key.clone());

        if prior == 0 {
            if !self.rank.is_full() {
                self.rank.push(key);
            }
            return Ok(());
        }

        if self.rank.contains(&key) {
            let store = &self.store;
            self.rank.sort_by_count(|k| store.get(k));
            return Ok(());
        }

        // Counted but not ranked: challenge the believed minimum at the
        // tail. A previously seen key implies a non-empty view, and every
        // ranked key must be counted.
        let min = self.rank.tail().ok_or(TopFreqError::RankedListEmpty)?;
        let min_count = self
            .store
            .lookup(min)
            .ok_or(TopFreqError::MissingFrequency)?;

        if count > min_count {
            self.rank.replace_tail(key);
        }
        Ok(())
    }

    /// The ranked view, hottest first.
    ///
    /// Holds at most `capacity` keys. See the type-level note on ordering:
    /// a key that just displaced the minimum sits at the tail until the
    /// next resort.
    pub fn top(&self) -> &[T] {
        self.rank.as_slice()
    }

    /// Number of observations of `key` since the last clear, 0 if unseen.
    pub fn frequency<Q>(&self, key: &Q) -> u64
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.get(key)
    }

    /// Maximum number of keys the ranked view can hold.
    pub fn capacity(&self) -> usize {
        self.rank.capacity()
    }

    /// Number of distinct keys observed since the last clear.
    pub fn distinct_keys(&self) -> usize {
        self.store.len()
    }

    /// True until the first observation, and again after `clear`.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drops every count and empties the ranked view.
    pub fn clear(&mut self) {
        self.store.clear();
        self.rank.clear();
    }
}

impl<T: Hash + Eq + Clone> Default for TopFreq<T> {
    fn default() -> Self {
        Self::new()
    }
}
