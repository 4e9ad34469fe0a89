//! Event team membership repository.
//!
//! Memberships are keyed by `(event_id, user_id)`, so an insert for a user who already has
//! a membership in the event fails with a unique constraint violation.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{error::AppError, model::team::EventTeamMember};

pub struct EventTeamMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventTeamMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a user to a team.
    ///
    /// # Returns
    /// - `Ok(())` - Membership created
    /// - `Err(DbErr)` - Database error, including a unique constraint violation when the
    ///   user already has a membership in the event
    pub async fn add(&self, event_id: i32, team_id: i32, user_id: u64) -> Result<(), DbErr> {
        entity::event_team_member::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            team_id: ActiveValue::Set(team_id),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Finds a user's membership within an event.
    pub async fn find_by_event_and_user(
        &self,
        event_id: i32,
        user_id: u64,
    ) -> Result<Option<EventTeamMember>, AppError> {
        let result = entity::prelude::EventTeamMember::find_by_id((event_id, user_id.to_string()))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        result
            .map(|(member, user)| EventTeamMember::from_entity(member, user))
            .transpose()
    }

    /// Gets a team's members ordered by join time.
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<EventTeamMember>, AppError> {
        self.get_by_teams(&[team_id]).await
    }

    /// Gets the members of several teams, ordered by join time within each team.
    pub async fn get_by_teams(&self, team_ids: &[i32]) -> Result<Vec<EventTeamMember>, AppError> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::EventTeamMember::find()
            .filter(entity::event_team_member::Column::TeamId.is_in(team_ids.iter().copied()))
            .order_by_asc(entity::event_team_member::Column::JoinedAt)
            .order_by_asc(entity::event_team_member::Column::UserId)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(member, user)| EventTeamMember::from_entity(member, user))
            .collect()
    }

    pub async fn count_by_team(&self, team_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EventTeamMember::find()
            .filter(entity::event_team_member::Column::TeamId.eq(team_id))
            .count(self.db)
            .await
    }

    /// Removes a user's membership within an event.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - User had no membership in the event
    pub async fn remove(&self, event_id: i32, user_id: u64) -> Result<bool, DbErr> {
        let result =
            entity::prelude::EventTeamMember::delete_by_id((event_id, user_id.to_string()))
                .exec(self.db)
                .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every membership of a team.
    pub async fn remove_by_team(&self, team_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::EventTeamMember::delete_many()
            .filter(entity::event_team_member::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
