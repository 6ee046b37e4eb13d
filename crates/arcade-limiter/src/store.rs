//! Counter storage behind the rate limiter
//!
//! The store contract is a small key-value surface so the in-process map and
//! a shared external counter store are interchangeable. `increment_if_below`
//! is the one compound operation: the compare and the increment must happen
//! under the same per-key lock or two concurrent requests could both observe
//! `count < max` and both be admitted past the quota.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::time::Duration;

/// One key's counter within its current window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowEntry {
    pub count: u32,
    pub reset_at: DateTime<Utc>,
}

impl WindowEntry {
    /// Start a fresh window at count 1
    pub fn open(now: DateTime<Utc>, window: Duration) -> Self {
        Self {
            count: 1,
            reset_at: now + to_chrono(window),
        }
    }

    /// Whether the window has passed
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.reset_at <= now
    }
}

#[inline]
fn to_chrono(window: Duration) -> ChronoDuration {
    ChronoDuration::milliseconds(window.as_millis() as i64)
}

/// Storage contract for window counters
pub trait CounterStore: Send + Sync {
    /// Current entry for a key, expired or not
    fn get(&self, key: &str) -> Option<WindowEntry>;

    /// Overwrite a key's entry
    fn set_with_expiry(&self, key: &str, entry: WindowEntry);

    /// Atomic admit-or-reject against a key's window.
    ///
    /// Missing or expired entry: open a fresh window at count 1 and admit.
    /// Live entry below `max`: increment and admit. Live entry at `max`:
    /// leave untouched and reject. Returns the entry state after the call
    /// and whether the hit was admitted.
    fn increment_if_below(
        &self,
        key: &str,
        max: u32,
        window: Duration,
        now: DateTime<Utc>,
    ) -> (WindowEntry, bool);

    /// Drop every entry whose window has passed; returns how many were removed
    fn purge_expired(&self, now: DateTime<Utc>) -> usize;

    /// Number of tracked keys
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process counter store on a sharded concurrent map
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    entries: DashMap<String, WindowEntry>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for MemoryCounterStore {
    fn get(&self, key: &str) -> Option<WindowEntry> {
        self.entries.get(key).map(|e| *e)
    }

    fn set_with_expiry(&self, key: &str, entry: WindowEntry) {
        self.entries.insert(key.to_owned(), entry);
    }

    fn increment_if_below(
        &self,
        key: &str,
        max: u32,
        window: Duration,
        now: DateTime<Utc>,
    ) -> (WindowEntry, bool) {
        // The entry guard holds the shard lock, making read-modify-write
        // atomic with respect to other callers of the same key.
        match self.entries.entry(key.to_owned()) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                if entry.is_expired(now) {
                    *entry = WindowEntry::open(now, window);
                    (*entry, true)
                } else if entry.count < max {
                    entry.count += 1;
                    (*entry, true)
                } else {
                    (*entry, false)
                }
            }
            Entry::Vacant(vacant) => {
                let entry = WindowEntry::open(now, window);
                vacant.insert(entry);
                (entry, true)
            }
        }
    }

    fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before - self.entries.len()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(60);

    #[test]
    fn test_get_and_set_round_trip() {
        let store = MemoryCounterStore::new();
        let now = Utc::now();
        assert!(store.get("k").is_none());

        let entry = WindowEntry::open(now, WINDOW);
        store.set_with_expiry("k", entry);
        assert_eq!(store.get("k"), Some(entry));
    }

    #[test]
    fn test_increment_opens_fresh_window() {
        let store = MemoryCounterStore::new();
        let now = Utc::now();

        let (entry, admitted) = store.increment_if_below("k", 3, WINDOW, now);
        assert!(admitted);
        assert_eq!(entry.count, 1);
        assert_eq!(entry.reset_at, now + ChronoDuration::seconds(60));
    }

    #[test]
    fn test_increment_stops_at_max() {
        let store = MemoryCounterStore::new();
        let now = Utc::now();

        for expected in 1..=3 {
            let (entry, admitted) = store.increment_if_below("k", 3, WINDOW, now);
            assert!(admitted);
            assert_eq!(entry.count, expected);
        }

        let (entry, admitted) = store.increment_if_below("k", 3, WINDOW, now);
        assert!(!admitted);
        assert_eq!(entry.count, 3, "rejected hit must not mutate the counter");
    }

    #[test]
    fn test_expired_entry_restarts() {
        let store = MemoryCounterStore::new();
        let now = Utc::now();

        for _ in 0..3 {
            store.increment_if_below("k", 3, WINDOW, now);
        }

        let later = now + ChronoDuration::seconds(61);
        let (entry, admitted) = store.increment_if_below("k", 3, WINDOW, later);
        assert!(admitted);
        assert_eq!(entry.count, 1);
        assert!(entry.reset_at > later);
    }

    #[test]
    fn test_purge_removes_only_expired() {
        let store = MemoryCounterStore::new();
        let now = Utc::now();

        store.increment_if_below("old", 3, WINDOW, now);
        let later = now + ChronoDuration::seconds(120);
        store.increment_if_below("new", 3, WINDOW, later);

        let removed = store.purge_expired(later);
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("old").is_none());
        assert!(store.get("new").is_some());
    }

    #[test]
    fn test_concurrent_hits_never_exceed_max() {
        use std::sync::Arc;

        let store = Arc::new(MemoryCounterStore::new());
        let now = Utc::now();
        let mut handles = Vec::new();

        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                let mut admitted = 0u32;
                for _ in 0..100 {
                    if store.increment_if_below("k", 50, WINDOW, now).1 {
                        admitted += 1;
                    }
                }
                admitted
            }));
        }

        let total: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 50);
        assert_eq!(store.get("k").unwrap().count, 50);
    }
}
