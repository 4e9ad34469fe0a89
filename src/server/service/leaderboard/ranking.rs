//! Sorted in-memory ranking for a single leaderboard.
//!
//! Entries are kept in a vector sorted by score descending, then by insertion sequence
//! ascending, so equal scores rank in the order subjects first appeared. A side index maps
//! each subject to its sort key, which makes every lookup a binary search:
//!
//! - rank lookup: O(log n)
//! - slice of k entries: O(log n + k)
//! - upsert/remove: O(log n) search plus the vector shift
//!
//! Leaderboards are read far more often than written and are capped at their definition's
//! limit, so the shift cost stays small.

use std::{cmp::Ordering, collections::HashMap};

use crate::server::model::leaderboard::RankedScore;

#[derive(Debug, Clone, Copy, PartialEq)]
struct SortKey {
    score: f64,
    /// Assigned on first insertion and kept across score updates.
    seq: u64,
}

impl SortKey {
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then(self.seq.cmp(&other.seq))
    }
}

#[derive(Debug, Clone)]
struct Entry {
    subject_id: String,
    key: SortKey,
}

/// Result of an upsert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpsertOutcome {
    /// 1-based rank of the subject after the write, `None` if it fell outside the capacity.
    pub rank: Option<usize>,
    /// Subjects dropped because the leaderboard exceeded its capacity.
    pub evicted: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RankedLeaderboard {
    entries: Vec<Entry>,
    index: HashMap<String, SortKey>,
    next_seq: u64,
    capacity: usize,
}

impl RankedLeaderboard {
    /// Creates an empty ranking retaining at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            next_seq: 0,
            capacity,
        }
    }

    /// Builds a ranking from scores listed in first-insertion order.
    ///
    /// A subject listed twice keeps its first position in the insertion order and its last
    /// score.
    ///
    /// # Returns
    /// - The ranking
    /// - Subjects beyond `capacity` that were dropped
    pub fn from_ordered_scores<I>(capacity: usize, scores: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut board = Self::new(capacity);

        for (subject_id, score) in scores {
            match board.index.get_mut(&subject_id) {
                Some(key) => key.score = score,
                None => {
                    let seq = board.take_seq();
                    board.index.insert(subject_id, SortKey { score, seq });
                }
            }
        }

        board.entries = board
            .index
            .iter()
            .map(|(subject_id, key)| Entry {
                subject_id: subject_id.clone(),
                key: *key,
            })
            .collect();
        board.entries.sort_by(|a, b| a.key.rank_cmp(&b.key));

        let evicted = board.evict_overflow();

        (board, evicted)
    }

    /// Inserts or updates a subject's score.
    ///
    /// Writing a subject's current score again changes nothing. When the ranking grows past
    /// its capacity the lowest entries are evicted, which can include the subject itself.
    pub fn upsert(&mut self, subject_id: &str, score: f64) -> UpsertOutcome {
        let key = match self.index.get(subject_id).copied() {
            Some(existing) if existing.score.total_cmp(&score).is_eq() => {
                return UpsertOutcome {
                    rank: self.rank_of(subject_id),
                    evicted: Vec::new(),
                };
            }
            Some(existing) => {
                if let Ok(pos) = self.position(&existing) {
                    self.entries.remove(pos);
                }
                SortKey {
                    score,
                    seq: existing.seq,
                }
            }
            None => SortKey {
                score,
                seq: self.take_seq(),
            },
        };

        let pos = self.position(&key).unwrap_or_else(|pos| pos);
        self.entries.insert(
            pos,
            Entry {
                subject_id: subject_id.to_string(),
                key,
            },
        );
        self.index.insert(subject_id.to_string(), key);

        let evicted = self.evict_overflow();
        let rank = (pos < self.entries.len()).then_some(pos + 1);

        UpsertOutcome { rank, evicted }
    }

    /// Removes a subject, returning whether it was ranked.
    ///
    /// A removed subject that is inserted again gets a new insertion sequence.
    pub fn remove(&mut self, subject_id: &str) -> bool {
        let Some(key) = self.index.remove(subject_id) else {
            return false;
        };

        if let Ok(pos) = self.position(&key) {
            self.entries.remove(pos);
        }

        true
    }

    /// 1-based rank of a subject, or `None` if it has no entry.
    pub fn rank_of(&self, subject_id: &str) -> Option<usize> {
        let key = self.index.get(subject_id)?;
        self.position(key).ok().map(|pos| pos + 1)
    }

    pub fn entry(&self, subject_id: &str) -> Option<RankedScore> {
        let key = self.index.get(subject_id)?;
        let pos = self.position(key).ok()?;
        Some(self.ranked(pos))
    }

    /// Up to `limit` entries starting at `offset`, best first.
    ///
    /// An offset past the end yields an empty page.
    pub fn slice(&self, offset: usize, limit: usize) -> Vec<RankedScore> {
        let end = offset.saturating_add(limit).min(self.entries.len());
        (offset..end).map(|pos| self.ranked(pos)).collect()
    }

    /// Up to `count` entries ranked directly above `subject_id`, best first.
    ///
    /// For a subject without an entry these are the lowest ranked entries, the ones it has
    /// to pass to get onto the leaderboard.
    pub fn entries_above(&self, subject_id: &str, count: usize) -> Vec<RankedScore> {
        let end = self
            .index
            .get(subject_id)
            .and_then(|key| self.position(key).ok())
            .unwrap_or(self.entries.len());
        let start = end.saturating_sub(count);

        (start..end).map(|pos| self.ranked(pos)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn position(&self, key: &SortKey) -> Result<usize, usize> {
        self.entries.binary_search_by(|entry| entry.key.rank_cmp(key))
    }

    fn ranked(&self, pos: usize) -> RankedScore {
        let entry = &self.entries[pos];
        RankedScore {
            subject_id: entry.subject_id.clone(),
            score: entry.key.score,
            rank: pos + 1,
        }
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn evict_overflow(&mut self) -> Vec<String> {
        if self.entries.len() <= self.capacity {
            return Vec::new();
        }

        let evicted: Vec<String> = self
            .entries
            .drain(self.capacity..)
            .map(|entry| entry.subject_id)
            .collect();
        for subject_id in &evicted {
            self.index.remove(subject_id);
        }

        evicted
    }
}
