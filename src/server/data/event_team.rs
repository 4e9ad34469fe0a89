//! Event team data repository.
//!
//! Membership rows are handled by `EventTeamMemberRepository`; deleting a team here does
//! not touch them, so services remove members first.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::team::{CreateEventTeamParam, EventTeam},
};

pub struct EventTeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventTeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateEventTeamParam) -> Result<EventTeam, AppError> {
        let entity = entity::event_team::ActiveModel {
            event_id: ActiveValue::Set(param.event_id),
            owner_id: ActiveValue::Set(param.owner_id.to_string()),
            name: ActiveValue::Set(param.name),
            join_code: ActiveValue::Set(param.join_code),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        EventTeam::from_entity(entity)
    }

    pub async fn find_by_id(&self, team_id: i32) -> Result<Option<EventTeam>, AppError> {
        let entity = entity::prelude::EventTeam::find_by_id(team_id)
            .one(self.db)
            .await?;

        entity.map(EventTeam::from_entity).transpose()
    }

    /// Gets all teams of an event in creation order.
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<EventTeam>, AppError> {
        entity::prelude::EventTeam::find()
            .filter(entity::event_team::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_team::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(EventTeam::from_entity)
            .collect()
    }

    /// Checks whether any team currently uses `join_code`.
    pub async fn join_code_exists(&self, join_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::EventTeam::find()
            .filter(entity::event_team::Column::JoinCode.eq(join_code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Renames a team.
    ///
    /// # Returns
    /// - `Ok(EventTeam)` - The updated team
    /// - `Err(AppError::DbErr(DbErr::RecordNotFound))` - No team with that ID
    pub async fn update_name(&self, team_id: i32, name: String) -> Result<EventTeam, AppError> {
        let mut active_model = self.find_active(team_id).await?;
        active_model.name = ActiveValue::Set(name);

        EventTeam::from_entity(active_model.update(self.db).await?)
    }

    /// Replaces a team's join code.
    ///
    /// # Returns
    /// - `Ok(EventTeam)` - The updated team
    /// - `Err(AppError::DbErr(DbErr::RecordNotFound))` - No team with that ID
    pub async fn update_join_code(
        &self,
        team_id: i32,
        join_code: String,
    ) -> Result<EventTeam, AppError> {
        let mut active_model = self.find_active(team_id).await?;
        active_model.join_code = ActiveValue::Set(join_code);

        EventTeam::from_entity(active_model.update(self.db).await?)
    }

    /// Deletes a team.
    ///
    /// # Returns
    /// - `Ok(true)` - Team deleted
    /// - `Ok(false)` - No team with that ID
    pub async fn delete(&self, team_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EventTeam::delete_by_id(team_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_active(&self, team_id: i32) -> Result<entity::event_team::ActiveModel, DbErr> {
        let team = entity::prelude::EventTeam::find_by_id(team_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Event team with id {} not found",
                team_id
            )))?;

        Ok(team.into())
    }
}
