//! Fixed-window admission control and the background sweep

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::quota::Quota;
use crate::store::{CounterStore, MemoryCounterStore};

/// Outcome of a rate limit check
///
/// Rejection is a normal outcome, not an error: callers translate
/// `allowed == false` into HTTP 429, or for low-stakes counters simply skip
/// recording the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,
    /// Requests left in the current window (0 when rejected)
    pub remaining: u32,
    /// When the current window rolls over
    pub reset_at: DateTime<Utc>,
}

/// Process-wide fixed-window rate limiter
///
/// Cheap to clone; clones share the same counter table.
#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn CounterStore>,
}

impl RateLimiter {
    /// Limiter backed by the in-process store
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryCounterStore::new()))
    }

    /// Limiter backed by a caller-provided store
    pub fn with_store(store: Arc<dyn CounterStore>) -> Self {
        Self { store }
    }

    /// Admit or reject a keyed request against a quota
    pub fn check(&self, key: &str, quota: Quota) -> Decision {
        self.check_at(key, quota, Utc::now())
    }

    /// `check` with an explicit clock, the seam tests drive
    pub fn check_at(&self, key: &str, quota: Quota, now: DateTime<Utc>) -> Decision {
        let (entry, allowed) =
            self.store
                .increment_if_below(key, quota.max_requests, quota.window, now);

        Decision {
            allowed,
            remaining: if allowed {
                quota.max_requests.saturating_sub(entry.count)
            } else {
                0
            },
            reset_at: entry.reset_at,
        }
    }

    /// Drop expired entries now; returns how many were removed
    pub fn sweep(&self) -> usize {
        self.store.purge_expired(Utc::now())
    }

    /// Number of keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.store.len()
    }

    /// Spawn the recurring sweep task.
    ///
    /// The caller owns the returned handle; dropping it (or calling
    /// [`SweeperHandle::shutdown`]) stops the task. Checks stay correct
    /// without the sweep, which exists only to bound memory to the keys
    /// active in the last window-plus-interval.
    pub fn start_sweeper(&self, every: Duration) -> SweeperHandle {
        let limiter = self.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let removed = limiter.sweep();
                if removed > 0 {
                    debug!(removed, tracked = limiter.tracked_keys(), "swept rate limit entries");
                }
            }
        });

        SweeperHandle { handle }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("tracked_keys", &self.store.len())
            .finish()
    }
}

/// Owner handle for the sweep task; aborts the task when dropped
#[derive(Debug)]
pub struct SweeperHandle {
    handle: JoinHandle<()>,
}

impl SweeperHandle {
    /// Stop the sweep task
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::WindowEntry;
    use chrono::Duration as ChronoDuration;

    fn quota(max: u32, window_ms: u64) -> Quota {
        Quota::new(max, Duration::from_millis(window_ms))
    }

    #[test]
    fn test_window_admits_up_to_max_then_rejects() {
        let limiter = RateLimiter::new();
        let now = Utc::now();
        let q = quota(3, 1000);

        for expected_remaining in [2, 1, 0] {
            let decision = limiter.check_at("k", q, now);
            assert!(decision.allowed);
            assert_eq!(decision.remaining, expected_remaining);
        }

        let rejected = limiter.check_at("k", q, now);
        assert!(!rejected.allowed);
        assert_eq!(rejected.remaining, 0);
    }

    #[test]
    fn test_rejected_check_reports_stored_reset() {
        let limiter = RateLimiter::new();
        let now = Utc::now();
        let q = quota(1, 1000);

        let first = limiter.check_at("k", q, now);
        let rejected = limiter.check_at("k", q, now + ChronoDuration::milliseconds(500));
        assert!(!rejected.allowed);
        assert_eq!(rejected.reset_at, first.reset_at);
    }

    #[test]
    fn test_window_rollover_resets_counter() {
        let limiter = RateLimiter::new();
        let now = Utc::now();
        let q = quota(3, 1000);

        for _ in 0..4 {
            limiter.check_at("k", q, now);
        }

        let later = now + ChronoDuration::milliseconds(1001);
        let fresh = limiter.check_at("k", q, later);
        assert!(fresh.allowed);
        assert_eq!(fresh.remaining, 2);
        assert_eq!(fresh.reset_at, later + ChronoDuration::milliseconds(1000));
    }

    #[test]
    fn test_double_burst_across_boundary_is_permitted() {
        // Known fixed-window characteristic: max hits at the end of one
        // window plus max hits right after rollover.
        let limiter = RateLimiter::new();
        let now = Utc::now();
        let q = quota(3, 1000);

        for _ in 0..3 {
            assert!(limiter.check_at("k", q, now).allowed);
        }
        let after_rollover = now + ChronoDuration::milliseconds(1001);
        for _ in 0..3 {
            assert!(limiter.check_at("k", q, after_rollover).allowed);
        }
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new();
        let now = Utc::now();
        let q = quota(2, 1000);

        limiter.check_at("play:1:10", q, now);
        limiter.check_at("play:1:10", q, now);
        assert!(!limiter.check_at("play:1:10", q, now).allowed);

        let other = limiter.check_at("play:2:10", q, now);
        assert!(other.allowed);
        assert_eq!(other.remaining, 1);
    }

    #[test]
    fn test_sweep_forgets_expired_keys() {
        let limiter = RateLimiter::new();
        let now = Utc::now() - ChronoDuration::seconds(120);
        let q = quota(3, 1000);

        for _ in 0..4 {
            limiter.check_at("k", q, now);
        }
        assert_eq!(limiter.tracked_keys(), 1);

        let removed = limiter.sweep();
        assert_eq!(removed, 1);
        assert_eq!(limiter.tracked_keys(), 0);

        // No memory of the exhausted window remains
        let fresh = limiter.check("k", q);
        assert!(fresh.allowed);
        assert_eq!(fresh.remaining, 2);
    }

    #[test]
    fn test_expired_entry_is_fresh_even_before_sweep() {
        let limiter = RateLimiter::new();
        let now = Utc::now();
        let q = quota(1, 1000);

        limiter.check_at("k", q, now);
        assert!(!limiter.check_at("k", q, now).allowed);

        // Sweep has not run, but the stored window has passed
        let later = now + ChronoDuration::milliseconds(1500);
        assert!(limiter.check_at("k", q, later).allowed);
    }

    #[test]
    fn test_seeded_expired_entry_behaves_as_absent() {
        let store = Arc::new(MemoryCounterStore::new());
        let limiter = RateLimiter::with_store(store.clone());
        let now = Utc::now();

        store.set_with_expiry(
            "k",
            WindowEntry {
                count: 99,
                reset_at: now - ChronoDuration::seconds(1),
            },
        );

        let decision = limiter.check_at("k", quota(3, 1000), now);
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 2);
    }

    #[tokio::test]
    async fn test_sweeper_task_drops_expired_entries() {
        let limiter = RateLimiter::new();
        let past = Utc::now() - ChronoDuration::seconds(120);
        limiter.check_at("k", quota(3, 1000), past);
        assert_eq!(limiter.tracked_keys(), 1);

        let sweeper = limiter.start_sweeper(Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(limiter.tracked_keys(), 0);

        sweeper.shutdown();
    }
}
