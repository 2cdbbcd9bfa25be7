//! TTL-scoped session caching.
//!
//! The controller keeps one [`ProgressTracker`](crate::tracker::ProgressTracker)
//! per application for the lifetime of its sync sessions. Trackers live in a
//! [`SessionCache`] keyed by the application's stable UID; memory for
//! inactive applications is reclaimed lazily once their sliding TTL lapses.

pub mod session;

pub use session::{SESSION_TTL_HOURS, SessionCache};

use std::sync::Mutex;

use crate::tracker::ProgressTracker;

/// The cache instantiation the controller uses: one mutex-guarded tracker
/// per application UID. The per-value mutex serializes the single owning
/// sync attempt's access; the tracker itself is not thread-safe.
pub type TrackerCache = SessionCache<Mutex<ProgressTracker>>;
