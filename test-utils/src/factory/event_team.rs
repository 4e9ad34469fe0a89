//! Event team factory.
//!
//! Teams created here always include the owner's membership row, matching the state the
//! service leaves behind after a successful team creation.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct EventTeamFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    owner_id: String,
    name: String,
    join_code: String,
}

impl<'a> EventTeamFactory<'a> {
    /// Creates a new EventTeamFactory for the given event and owner.
    ///
    /// Defaults:
    /// - name: `"Team {id}"`
    /// - join_code: `"CODE{id}"`
    pub fn new(db: &'a DatabaseConnection, event_id: i32, owner_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            event_id,
            owner_id: owner_id.to_string(),
            name: format!("Team {}", id),
            join_code: format!("CODE{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn join_code(mut self, join_code: impl Into<String>) -> Self {
        self.join_code = join_code.into();
        self
    }

    /// Inserts the team and the owner's membership.
    pub async fn build(self) -> Result<entity::event_team::Model, DbErr> {
        let now = Utc::now();
        let team = entity::event_team::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            owner_id: ActiveValue::Set(self.owner_id.clone()),
            name: ActiveValue::Set(self.name),
            join_code: ActiveValue::Set(self.join_code),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::event_team_member::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            user_id: ActiveValue::Set(self.owner_id),
            team_id: ActiveValue::Set(team.id),
            joined_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(team)
    }
}

/// Creates a team with default values owned by `owner_id`.
pub async fn create_team(
    db: &DatabaseConnection,
    event_id: i32,
    owner_id: &str,
) -> Result<entity::event_team::Model, DbErr> {
    EventTeamFactory::new(db, event_id, owner_id).build().await
}
