//! # arcade-limiter
//!
//! Fixed-window rate limiting backed by an in-process counter table.
//!
//! Every write endpoint asks [`RateLimiter::check`] whether a keyed request
//! may proceed. Keys follow the `"<scope>:<subject>[:<object>]"` convention
//! (for example `"comment:193846"` or `"play:193846:204511"`), and each
//! endpoint class has a named [`Quota`].
//!
//! ## Semantics
//!
//! This is a fixed-window counter, not a sliding window or token bucket: the
//! counter resets in full when a window expires, so a burst at the end of one
//! window followed by a burst at the start of the next can admit up to twice
//! the quota across the boundary. That is a documented characteristic of the
//! scheme, accepted for its simplicity.
//!
//! An entry past its reset time is treated as expired at check time, whether
//! or not the background sweep has removed it yet; the sweep only bounds
//! memory, never correctness.
//!
//! ## Deployment constraint
//!
//! Counters live in process memory. Running several server instances behind a
//! load balancer gives each instance its own table, multiplying every quota
//! by the instance count. The [`CounterStore`] trait is the seam where a
//! shared external store would slot in; only the in-memory store ships here.

mod limiter;
mod quota;
mod store;

pub use limiter::{Decision, RateLimiter, SweeperHandle};
pub use quota::Quota;
pub use store::{CounterStore, MemoryCounterStore, WindowEntry};
