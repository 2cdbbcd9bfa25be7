//! A process-wide cache for values that are not important enough to persist
//! and would no longer be relevant after a controller restart.
//!
//! Each key owns exactly one entry with a sliding expiration: every access
//! pushes the deadline forward by the TTL window, added to the entry's
//! current deadline rather than reset from "now". Expired entries are
//! reclaimed lazily, by a pruning pass that runs before each insert, so an
//! inactive key can outlive its TTL until some other key misses.
//!
//! # Retention
//!
//! | Access pattern | Effect on deadline |
//! |----------------|--------------------|
//! | Create | `now + 12h` |
//! | Every subsequent hit | `current deadline + 12h` |
//! | No access, another key misses | removed once the deadline passes |

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::types::EntityId;

/// Sliding TTL window, in hours, applied on creation and on every access.
pub const SESSION_TTL_HOURS: i64 = 12;

/// One cached value and its sliding deadline. The value is created by the
/// caller's factory on first access and discarded (not migrated) when the
/// entry is pruned.
#[derive(Debug)]
struct SessionEntry<V> {
    expires_at: DateTime<Utc>,
    value: Arc<V>,
}

impl<V> SessionEntry<V> {
    fn renew(&mut self) {
        self.expires_at += Duration::hours(SESSION_TTL_HOURS);
    }
}

/// A mutex-guarded map from entity key to cached value.
///
/// All reads, writes, and prune scans run under one coarse lock; entry
/// counts are bounded by the number of entities the controller manages, so
/// the O(n) prune on miss is acceptable. Values are handed out as `Arc`
/// clones and used outside the lock by their owning caller.
#[derive(Debug)]
pub struct SessionCache<V> {
    entries: Mutex<HashMap<String, SessionEntry<V>>>,
}

impl<V> Default for SessionCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SessionCache<V> {
    pub fn new() -> Self {
        SessionCache {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the value for `id`, creating it with `factory` if absent.
    ///
    /// A hit renews the entry's deadline additively. A miss first prunes
    /// every entry whose deadline is strictly in the past, then inserts a
    /// fresh entry whose effective TTL is one full window from now. The
    /// whole operation is one critical section: callers never observe a
    /// half-created entry, and a prune can never race a fresh insert.
    ///
    /// This operation is total; every key yields a valid value.
    pub fn get_or_create(&self, id: &EntityId, factory: impl FnOnce() -> V) -> Arc<V> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(entry) = entries.get_mut(id.as_str()) {
            // Keep alive any value that is in use.
            entry.renew();
            return Arc::clone(&entry.value);
        }

        // Reclaim expired entries before inserting a new one.
        let now = Utc::now();
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at >= now);
        let pruned = before - entries.len();
        if pruned > 0 {
            debug!(pruned, "pruned expired session entries");
        }

        let mut entry = SessionEntry {
            expires_at: now,
            value: Arc::new(factory()),
        };
        entry.renew();
        let value = Arc::clone(&entry.value);
        entries.insert(id.as_str().to_string(), entry);

        value
    }

    /// Number of live entries, counting any expired ones not yet pruned.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `id` currently has an entry. May report entries that are
    /// past their deadline but not yet lazily pruned.
    pub fn contains(&self, id: &EntityId) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id.as_str())
    }

    #[cfg(test)]
    fn expires_at(&self, id: &EntityId) -> Option<DateTime<Utc>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id.as_str())
            .map(|entry| entry.expires_at)
    }

    #[cfg(test)]
    fn backdate(&self, id: &EntityId, expires_at: DateTime<Utc>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(id.as_str())
            .expect("entry must exist to backdate")
            .expires_at = expires_at;
    }
}
