//! Event domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::event::{CreateEventDto, EventDto, PaginatedEventsDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// Timed community event that users form teams for.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    /// Discord guild hosting the event.
    pub guild_id: u64,
    pub name: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Maximum members per team, owner included.
    pub max_team_size: u32,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Whether the event still accepts team changes at `now`.
    ///
    /// Teams may be formed before the event starts, so only the end time is checked.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.end_time
    }

    pub fn into_dto(self) -> EventDto {
        let active = self.is_active_at(Utc::now());

        EventDto {
            id: self.id,
            guild_id: self.guild_id,
            name: self.name,
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            max_team_size: self.max_team_size,
            active,
        }
    }

    /// Converts an entity model to an event domain model.
    ///
    /// # Returns
    /// - `Ok(Event)` - The converted event
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored guild ID is not a valid u64
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            name: entity.name,
            description: entity.description,
            start_time: entity.start_time,
            end_time: entity.end_time,
            max_team_size: entity.max_team_size.max(0) as u32,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating an event.
#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub guild_id: u64,
    pub name: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub max_team_size: u32,
}

impl CreateEventParam {
    /// Builds creation parameters from the request DTO.
    ///
    /// # Arguments
    /// - `dto` - Request payload
    /// - `default_team_size` - Capacity used when the payload omits `max_team_size`
    pub fn from_dto(dto: CreateEventDto, default_team_size: u32) -> Self {
        Self {
            guild_id: dto.guild_id,
            name: dto.name,
            description: dto.description,
            start_time: dto.start_time,
            end_time: dto.end_time,
            max_team_size: dto.max_team_size.unwrap_or(default_team_size),
        }
    }
}

/// One page of a guild's events, newest first.
#[derive(Debug, Clone)]
pub struct PaginatedEvents {
    pub events: Vec<Event>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedEvents {
    pub fn into_dto(self) -> PaginatedEventsDto {
        PaginatedEventsDto {
            events: self.events.into_iter().map(Event::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
