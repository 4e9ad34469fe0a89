//! Persisted leaderboard scores.
//!
//! The `leaderboard_score` table is the durable copy of every in-memory ranking. Row ids
//! are assigned on first insert and never change on update, so loading rows by ascending
//! id reproduces the first-insertion order used to break score ties.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::leaderboard::LeaderboardScore;

pub struct LeaderboardScoreRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeaderboardScoreRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a subject's score or updates the existing row in place.
    ///
    /// Callers must hold the leaderboard's writer lock; the lookup and the write are not
    /// atomic on their own.
    ///
    /// # Arguments
    /// - `leaderboard_id` - Leaderboard slug
    /// - `subject_id` - Profile member or account id
    /// - `score` - Normalized score
    ///
    /// # Returns
    /// - `Ok(LeaderboardScore)` - The stored score
    /// - `Err(DbErr)` - Database error during lookup or write
    pub async fn upsert(
        &self,
        leaderboard_id: &str,
        subject_id: &str,
        score: f64,
    ) -> Result<LeaderboardScore, DbErr> {
        let existing = entity::prelude::LeaderboardScore::find()
            .filter(entity::leaderboard_score::Column::LeaderboardId.eq(leaderboard_id))
            .filter(entity::leaderboard_score::Column::SubjectId.eq(subject_id))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(row) => {
                let mut active_model: entity::leaderboard_score::ActiveModel = row.into();
                active_model.score = ActiveValue::Set(score);
                active_model.updated_at = ActiveValue::Set(Utc::now());
                active_model.update(self.db).await?
            }
            None => {
                entity::leaderboard_score::ActiveModel {
                    leaderboard_id: ActiveValue::Set(leaderboard_id.to_string()),
                    subject_id: ActiveValue::Set(subject_id.to_string()),
                    score: ActiveValue::Set(score),
                    updated_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(LeaderboardScore::from_entity(entity))
    }

    /// Gets every score of a leaderboard in first-insertion order.
    pub async fn get_by_leaderboard(
        &self,
        leaderboard_id: &str,
    ) -> Result<Vec<LeaderboardScore>, DbErr> {
        let entities = entity::prelude::LeaderboardScore::find()
            .filter(entity::leaderboard_score::Column::LeaderboardId.eq(leaderboard_id))
            .order_by_asc(entity::leaderboard_score::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(LeaderboardScore::from_entity)
            .collect())
    }

    /// Deletes the given subjects' rows from one leaderboard.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    pub async fn delete_subjects(
        &self,
        leaderboard_id: &str,
        subject_ids: &[String],
    ) -> Result<u64, DbErr> {
        if subject_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::LeaderboardScore::delete_many()
            .filter(entity::leaderboard_score::Column::LeaderboardId.eq(leaderboard_id))
            .filter(entity::leaderboard_score::Column::SubjectId.is_in(subject_ids.iter().cloned()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
