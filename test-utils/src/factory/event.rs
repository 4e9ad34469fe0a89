//! Event factory for creating test community events.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events.
///
/// Events default to having started an hour ago and ending in seven days, so they accept
/// team changes unless `ended()` or explicit times are used.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    description: Option<String>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    max_team_size: i32,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric string
    /// - name: `"Event {id}"`
    /// - start_time: one hour ago
    /// - end_time: seven days from now
    /// - max_team_size: `4`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            guild_id: id.to_string(),
            name: format!("Event {}", id),
            description: None,
            start_time: now - Duration::hours(1),
            end_time: now + Duration::days(7),
            max_team_size: 4,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn max_team_size(mut self, max_team_size: i32) -> Self {
        self.max_team_size = max_team_size;
        self
    }

    /// Moves the event window into the past so the event counts as ended.
    pub fn ended(mut self) -> Self {
        let now = Utc::now();
        self.start_time = now - Duration::days(8);
        self.end_time = now - Duration::days(1);
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            max_team_size: ActiveValue::Set(self.max_team_size),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
