//! Leaderboard query and write service.
//!
//! `LeaderboardService` validates leaderboard ids against the registry, serves slices and
//! rank lookups from the in-memory `LeaderboardStore`, and keeps the store and the
//! `leaderboard_score` table in step on writes.
//!
//! Every write to a leaderboard runs under that leaderboard's writer lock: the database is
//! updated first, then memory. Reads only take the short in-memory read lock.

pub mod ranking;
pub mod registry;
pub mod store;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::leaderboard_score::LeaderboardScoreRepository,
    error::{internal::InternalError, leaderboard::LeaderboardError, AppError},
    model::leaderboard::{
        LeaderboardDefinition, LeaderboardPositions, LeaderboardRank, LeaderboardScope,
        LeaderboardSlice, ScoreSubmission,
    },
    service::leaderboard::{
        ranking::RankedLeaderboard, registry::LeaderboardRegistry, store::LeaderboardStore,
    },
};

/// Most entries returned above a subject in a rank lookup.
pub const MAX_UPCOMING: usize = 25;

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
    registry: &'a LeaderboardRegistry,
    store: &'a LeaderboardStore,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        registry: &'a LeaderboardRegistry,
        store: &'a LeaderboardStore,
    ) -> Self {
        Self {
            db,
            registry,
            store,
        }
    }

    /// All registered definitions ordered by id.
    pub fn list_definitions(&self) -> impl Iterator<Item = &'a LeaderboardDefinition> {
        self.registry.all()
    }

    /// Looks up a definition.
    ///
    /// # Returns
    /// - `Ok(&LeaderboardDefinition)` - Registered definition
    /// - `Err(LeaderboardError::UnknownLeaderboard)` - No leaderboard with that id
    pub fn definition(&self, leaderboard_id: &str) -> Result<&'a LeaderboardDefinition, AppError> {
        self.registry
            .get(leaderboard_id)
            .ok_or_else(|| LeaderboardError::UnknownLeaderboard(leaderboard_id.to_string()).into())
    }

    /// Gets a page of a leaderboard with its metadata.
    ///
    /// # Arguments
    /// - `leaderboard_id` - Leaderboard slug
    /// - `offset` - Number of entries to skip
    /// - `limit` - Maximum entries to return, clamped to the configured maximum
    ///
    /// # Returns
    /// - `Ok(LeaderboardSlice)` - Page of entries, empty when `offset` is past the end
    /// - `Err(LeaderboardError::UnknownLeaderboard)` - No leaderboard with that id
    /// - `Err(LeaderboardError::InvalidRange)` - Negative offset or limit
    pub async fn get_slice(
        &self,
        leaderboard_id: &str,
        offset: i64,
        limit: i64,
    ) -> Result<LeaderboardSlice, AppError> {
        let definition = self.definition(leaderboard_id)?;

        let (Ok(start), Ok(count)) = (usize::try_from(offset), usize::try_from(limit)) else {
            return Err(LeaderboardError::InvalidRange { offset, limit }.into());
        };

        let entries = self
            .store
            .slice(leaderboard_id, start, count)
            .await
            .ok_or_else(|| missing_slot(leaderboard_id))?;

        Ok(LeaderboardSlice {
            definition: definition.clone(),
            offset: start,
            limit: count.min(self.store.max_slice()),
            entries,
        })
    }

    /// Gets a subject's rank, score and the entries directly above it.
    ///
    /// # Arguments
    /// - `upcoming` - Entries above the subject to include, capped at `MAX_UPCOMING`
    ///
    /// # Returns
    /// - `Ok(LeaderboardRank)` - Rank and score are `None` when the subject has no entry
    /// - `Err(LeaderboardError::UnknownLeaderboard)` - No leaderboard with that id
    pub async fn get_rank(
        &self,
        leaderboard_id: &str,
        subject_id: &str,
        upcoming: usize,
    ) -> Result<LeaderboardRank, AppError> {
        self.definition(leaderboard_id)?;

        let (entry, upcoming) = self
            .store
            .entry_with_upcoming(leaderboard_id, subject_id, upcoming.min(MAX_UPCOMING))
            .await
            .ok_or_else(|| missing_slot(leaderboard_id))?;

        Ok(LeaderboardRank {
            leaderboard_id: leaderboard_id.to_string(),
            subject_id: subject_id.to_string(),
            rank: entry.as_ref().map(|e| e.rank),
            score: entry.map(|e| e.score),
            upcoming,
        })
    }

    /// Collects a player's ranks across every leaderboard.
    ///
    /// Profile scoped leaderboards are looked up by `profile_member_id`, account scoped
    /// ones by `account_id`. Leaderboards without an entry are omitted.
    pub async fn get_positions(
        &self,
        account_id: &str,
        profile_member_id: &str,
    ) -> LeaderboardPositions {
        let mut positions = LeaderboardPositions::default();

        for definition in self.registry.all() {
            let subject_id = match definition.scope {
                LeaderboardScope::Profile => profile_member_id,
                LeaderboardScope::Account => account_id,
            };

            if let Some(rank) = self.store.rank_of(&definition.id, subject_id).await {
                positions.0.insert(definition.id.clone(), rank);
            }
        }

        positions
    }

    /// Writes a subject's score.
    ///
    /// The score is normalized for the leaderboard's data type. A score below the minimum
    /// removes any existing entry instead of ranking it. Subjects evicted by the write are
    /// deleted from the database so a rebuild produces the same ranking.
    ///
    /// # Returns
    /// - `Ok(ScoreSubmission)` - Stored score and resulting rank
    /// - `Err(LeaderboardError::UnknownLeaderboard)` - No leaderboard with that id
    /// - `Err(LeaderboardError::InvalidScore)` - Score is NaN or infinite
    /// - `Err(AppError::DbErr)` - Database error, memory is left unchanged
    pub async fn submit_score(
        &self,
        leaderboard_id: &str,
        subject_id: &str,
        score: f64,
    ) -> Result<ScoreSubmission, AppError> {
        let definition = self.definition(leaderboard_id)?;

        if !score.is_finite() {
            return Err(LeaderboardError::InvalidScore(score).into());
        }
        let score = definition.score_data_type.normalize(score);

        let _writer = self
            .store
            .lock_writer(leaderboard_id)
            .await
            .ok_or_else(|| missing_slot(leaderboard_id))?;
        let repo = LeaderboardScoreRepository::new(self.db);

        if score < definition.minimum_score {
            repo.delete_subjects(leaderboard_id, &[subject_id.to_string()])
                .await?;
            self.store.remove(leaderboard_id, subject_id).await;

            tracing::debug!(
                "Score {} for {} on {} is below the minimum {}",
                score,
                subject_id,
                leaderboard_id,
                definition.minimum_score
            );

            return Ok(ScoreSubmission {
                leaderboard_id: leaderboard_id.to_string(),
                subject_id: subject_id.to_string(),
                score,
                rank: None,
            });
        }

        repo.upsert(leaderboard_id, subject_id, score).await?;

        let outcome = self
            .store
            .upsert(leaderboard_id, subject_id, score)
            .await
            .ok_or_else(|| missing_slot(leaderboard_id))?;

        if !outcome.evicted.is_empty() {
            repo.delete_subjects(leaderboard_id, &outcome.evicted)
                .await?;
            tracing::debug!(
                "Evicted {} entries from {}",
                outcome.evicted.len(),
                leaderboard_id
            );
        }

        Ok(ScoreSubmission {
            leaderboard_id: leaderboard_id.to_string(),
            subject_id: subject_id.to_string(),
            score,
            rank: outcome.rank,
        })
    }

    /// Removes a subject from every leaderboard, e.g. when its profile is deleted.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Ids of the leaderboards the subject was removed from
    pub async fn remove_subject(&self, subject_id: &str) -> Result<Vec<String>, AppError> {
        let repo = LeaderboardScoreRepository::new(self.db);
        let subject = [subject_id.to_string()];
        let mut removed_from = Vec::new();

        for definition in self.registry.all() {
            let _writer = self
                .store
                .lock_writer(&definition.id)
                .await
                .ok_or_else(|| missing_slot(&definition.id))?;

            let deleted_rows = repo.delete_subjects(&definition.id, &subject).await?;
            let was_ranked = self.store.remove(&definition.id, subject_id).await;

            if deleted_rows > 0 || was_ranked {
                removed_from.push(definition.id.clone());
            }
        }

        Ok(removed_from)
    }

    /// Reloads one leaderboard's ranking from the database.
    ///
    /// Rows below the current minimum or beyond the limit are deleted, so definition
    /// changes take effect on the next rebuild.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of ranked entries after the rebuild
    pub async fn rebuild(&self, leaderboard_id: &str) -> Result<usize, AppError> {
        let definition = self.definition(leaderboard_id)?;

        let _writer = self
            .store
            .lock_writer(leaderboard_id)
            .await
            .ok_or_else(|| missing_slot(leaderboard_id))?;
        let repo = LeaderboardScoreRepository::new(self.db);

        let (eligible, below_minimum): (Vec<_>, Vec<_>) = repo
            .get_by_leaderboard(leaderboard_id)
            .await?
            .into_iter()
            .partition(|row| row.score >= definition.minimum_score);

        let (ranking, evicted) = RankedLeaderboard::from_ordered_scores(
            definition.limit,
            eligible.into_iter().map(|row| (row.subject_id, row.score)),
        );

        let mut stale: Vec<String> = below_minimum.into_iter().map(|row| row.subject_id).collect();
        stale.extend(evicted);
        repo.delete_subjects(leaderboard_id, &stale).await?;

        let ranked = ranking.len();
        self.store.replace(leaderboard_id, ranking).await;

        Ok(ranked)
    }

    /// Reloads every leaderboard from the database.
    ///
    /// # Returns
    /// - `Ok(usize)` - Total ranked entries across all leaderboards
    pub async fn rebuild_all(&self) -> Result<usize, AppError> {
        let mut total = 0;

        for definition in self.registry.all() {
            total += self.rebuild(&definition.id).await?;
        }

        Ok(total)
    }
}

fn missing_slot(leaderboard_id: &str) -> AppError {
    InternalError::MissingRankingSlot(leaderboard_id.to_string()).into()
}
