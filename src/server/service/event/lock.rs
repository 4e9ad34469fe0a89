//! Per-event mutation locks.
//!
//! Every mutating team operation holds its event's lock for the whole check-then-write
//! sequence, so two requests touching teams of the same event never interleave. Requests
//! for different events proceed in parallel.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Map of event id to that event's mutation lock.
///
/// Cloning shares the same map. Locks are created on first use and kept for the life of
/// the process.
#[derive(Clone, Default)]
pub struct EventLocks {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

impl EventLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and acquires the lock for `event_id`.
    ///
    /// The map lock is released before waiting on the event lock, so a long operation on
    /// one event never delays lock lookups for others.
    pub async fn lock(&self, event_id: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(event_id).or_default().clone()
        };

        lock.lock_owned().await
    }
}
