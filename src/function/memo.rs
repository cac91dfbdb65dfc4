//! The shared cache behind the `memoized` combinators.
//!
//! `MemoCache<K, V>` maps one argument tuple to one previously computed
//! result. The cache is unbounded and never evicts: it lives exactly as long
//! as the memoized callable that owns it, which is a documented design choice
//! rather than an oversight.
//!
//! # Locking Discipline
//!
//! A single `parking_lot::Mutex` guards the whole map, and the lock is held
//! **across the wrapped computation**. This is what turns "at most one
//! execution per distinct key" into a guarantee instead of a best effort: two
//! threads racing on the same new key serialize at the lock, the loser finds
//! the entry already present and never runs the computation. The cost is that
//! computations for *distinct* keys are serialized too while any one is in
//! flight. A per-key locking scheme could relax that without weakening the
//! contract, but the global lock is the documented default.
//!
//! parking_lot mutexes do not poison: if the computation panics, the guard is
//! released during unwinding before anything was inserted, so the key stays
//! absent and the next call with the same arguments re-attempts it.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;

/// A lazily populated, thread-safe map from argument tuple to result.
pub(crate) struct MemoCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key`, computing and inserting it first
    /// if absent.
    ///
    /// The internal lock is held for the full duration of `compute`, so for
    /// any key the computation runs at most once no matter how many threads
    /// race on it. A panic in `compute` unwinds before the insert; the key
    /// stays absent.
    pub(crate) fn get_or_compute<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce(&K) -> V,
    {
        let mut entries = self.entries.lock();
        if let Some(value) = entries.get(&key) {
            return value.clone();
        }
        let value = compute(&key);
        entries.insert(key, value.clone());
        value
    }
}
