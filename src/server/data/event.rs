//! Event data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::event::{CreateEventParam, Event},
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new event.
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event with generated ID
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateEventParam) -> Result<Event, AppError> {
        let entity = entity::event::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            max_team_size: ActiveValue::Set(param.max_team_size as i32),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Event::from_entity(entity)
    }

    pub async fn find_by_id(&self, event_id: i32) -> Result<Option<Event>, AppError> {
        let entity = entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await?;

        entity.map(Event::from_entity).transpose()
    }

    /// Gets a page of a guild's events, latest start time first.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of events per page
    ///
    /// # Returns
    /// - `Ok((events, total))` - Events on the page and the guild's total event count
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_guild_paginated(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Event>, u64), AppError> {
        let paginator = entity::prelude::Event::find()
            .filter(entity::event::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::event::Column::StartTime)
            .order_by_desc(entity::event::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let events = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((events, total))
    }
}
