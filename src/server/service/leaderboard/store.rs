//! Concurrent store of every leaderboard's ranking.
//!
//! The store holds one slot per registered leaderboard, created up front from the
//! registry. The id map is never modified afterwards, so finding a slot takes no lock.
//! Each slot has two locks:
//!
//! - `ranking`: a `RwLock` held only while reading or mutating the in-memory ranking.
//!   Readers see either the state before or after a write, never a partial one.
//! - `writer`: a `Mutex` serializing the write sequences of one leaderboard (persist then
//!   update memory, or reload from the database). Readers never touch it, so database I/O
//!   in a write never blocks reads.
//!
//! Unrelated leaderboards never contend with each other.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::server::{
    model::leaderboard::RankedScore,
    service::leaderboard::{
        ranking::{RankedLeaderboard, UpsertOutcome},
        registry::LeaderboardRegistry,
    },
};

struct LeaderboardSlot {
    writer: Arc<Mutex<()>>,
    ranking: RwLock<RankedLeaderboard>,
}

pub struct LeaderboardStore {
    slots: HashMap<String, LeaderboardSlot>,
    max_slice: usize,
}

impl LeaderboardStore {
    /// Creates an empty ranking for every leaderboard in the registry.
    ///
    /// # Arguments
    /// - `registry` - Registered leaderboard definitions
    /// - `max_slice` - Upper bound applied to every slice limit
    pub fn new(registry: &LeaderboardRegistry, max_slice: usize) -> Self {
        let slots = registry
            .all()
            .map(|definition| {
                (
                    definition.id.clone(),
                    LeaderboardSlot {
                        writer: Arc::new(Mutex::new(())),
                        ranking: RwLock::new(RankedLeaderboard::new(definition.limit)),
                    },
                )
            })
            .collect();

        Self { slots, max_slice }
    }

    pub fn max_slice(&self) -> usize {
        self.max_slice
    }

    pub fn contains(&self, leaderboard_id: &str) -> bool {
        self.slots.contains_key(leaderboard_id)
    }

    /// Acquires the leaderboard's writer lock.
    ///
    /// Returns `None` for unknown leaderboards. Holding the guard does not block readers.
    pub async fn lock_writer(&self, leaderboard_id: &str) -> Option<OwnedMutexGuard<()>> {
        let slot = self.slots.get(leaderboard_id)?;
        Some(slot.writer.clone().lock_owned().await)
    }

    /// Inserts or updates a subject's score in memory.
    ///
    /// Returns `None` for unknown leaderboards.
    pub async fn upsert(
        &self,
        leaderboard_id: &str,
        subject_id: &str,
        score: f64,
    ) -> Option<UpsertOutcome> {
        let slot = self.slots.get(leaderboard_id)?;
        Some(slot.ranking.write().await.upsert(subject_id, score))
    }

    /// Removes a subject from memory, returning whether it was ranked.
    pub async fn remove(&self, leaderboard_id: &str, subject_id: &str) -> bool {
        match self.slots.get(leaderboard_id) {
            Some(slot) => slot.ranking.write().await.remove(subject_id),
            None => false,
        }
    }

    /// Swaps in a freshly built ranking.
    ///
    /// Returns `false` for unknown leaderboards.
    pub async fn replace(&self, leaderboard_id: &str, ranking: RankedLeaderboard) -> bool {
        match self.slots.get(leaderboard_id) {
            Some(slot) => {
                *slot.ranking.write().await = ranking;
                true
            }
            None => false,
        }
    }

    /// Returns a page of entries with `limit` clamped to the store maximum.
    ///
    /// Returns `None` for unknown leaderboards.
    pub async fn slice(
        &self,
        leaderboard_id: &str,
        offset: usize,
        limit: usize,
    ) -> Option<Vec<RankedScore>> {
        let slot = self.slots.get(leaderboard_id)?;
        let limit = limit.min(self.max_slice);
        Some(slot.ranking.read().await.slice(offset, limit))
    }

    pub async fn rank_of(&self, leaderboard_id: &str, subject_id: &str) -> Option<usize> {
        let slot = self.slots.get(leaderboard_id)?;
        slot.ranking.read().await.rank_of(subject_id)
    }

    pub async fn entry(&self, leaderboard_id: &str, subject_id: &str) -> Option<RankedScore> {
        let slot = self.slots.get(leaderboard_id)?;
        slot.ranking.read().await.entry(subject_id)
    }

    /// Reads a subject's entry and the entries above it under one read lock.
    pub async fn entry_with_upcoming(
        &self,
        leaderboard_id: &str,
        subject_id: &str,
        upcoming: usize,
    ) -> Option<(Option<RankedScore>, Vec<RankedScore>)> {
        let slot = self.slots.get(leaderboard_id)?;
        let ranking = slot.ranking.read().await;

        Some((
            ranking.entry(subject_id),
            ranking.entries_above(subject_id, upcoming),
        ))
    }

    pub async fn len(&self, leaderboard_id: &str) -> Option<usize> {
        let slot = self.slots.get(leaderboard_id)?;
        Some(slot.ranking.read().await.len())
    }
}
