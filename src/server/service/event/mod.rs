//! Event and event team services.
//!
//! `EventService` manages events themselves and answers whether an event still accepts
//! team changes. `EventTeamService` runs the team membership workflow.

pub mod code;
pub mod lock;
pub mod team;

#[cfg(test)]
mod test;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::{team::TeamError, AppError},
    model::event::{CreateEventParam, Event, PaginatedEvents},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event.
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(AppError::BadRequest)` - Empty name, end not after start, or team size of zero
    pub async fn create_event(&self, param: CreateEventParam) -> Result<Event, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Event name must not be empty".to_string()));
        }
        if param.end_time <= param.start_time {
            return Err(AppError::BadRequest(
                "Event end time must be after its start time".to_string(),
            ));
        }
        if param.max_team_size == 0 || param.max_team_size > i32::MAX as u32 {
            return Err(AppError::BadRequest(
                "Team size must be at least 1".to_string(),
            ));
        }

        let event = EventRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Created event {} ({}) for guild {}",
            event.id,
            event.name,
            event.guild_id
        );

        Ok(event)
    }

    /// Gets an event.
    ///
    /// # Returns
    /// - `Ok(Event)` - The event
    /// - `Err(TeamError::EventNotFound)` - No event with that ID
    pub async fn get_event(&self, event_id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| TeamError::EventNotFound(event_id).into())
    }

    pub async fn list_events(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedEvents, AppError> {
        let per_page = per_page.max(1);
        let (events, total) = EventRepository::new(self.db)
            .get_by_guild_paginated(guild_id, page, per_page)
            .await?;

        Ok(PaginatedEvents {
            events,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    /// Whether the event currently accepts team changes.
    ///
    /// # Returns
    /// - `Ok(bool)` - `true` until the event's end time
    /// - `Err(TeamError::EventNotFound)` - No event with that ID
    pub async fn is_event_active(&self, event_id: i32) -> Result<bool, AppError> {
        Ok(self.get_event(event_id).await?.is_active_at(Utc::now()))
    }
}
