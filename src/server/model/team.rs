//! Event team domain models.
//!
//! Membership rows carry the event id alongside the team id so the `(event_id, user_id)`
//! key enforces one team per user per event in storage.

use chrono::{DateTime, Utc};

use crate::{
    model::team::{EventTeamDto, EventTeamMemberDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

#[derive(Debug, Clone, PartialEq)]
pub struct EventTeam {
    pub id: i32,
    pub event_id: i32,
    pub owner_id: u64,
    pub name: String,
    pub join_code: String,
    pub created_at: DateTime<Utc>,
}

impl EventTeam {
    pub fn from_entity(entity: entity::event_team::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            event_id: entity.event_id,
            owner_id: parse_u64_from_string(entity.owner_id)?,
            name: entity.name,
            join_code: entity.join_code,
            created_at: entity.created_at,
        })
    }
}

/// A user's membership on a team, with their display name.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTeamMember {
    pub user_id: u64,
    pub team_id: i32,
    pub name: String,
    pub joined_at: DateTime<Utc>,
}

impl EventTeamMember {
    /// Converts a membership row and its joined user row.
    ///
    /// Falls back to the Discord ID as display name when the user row is missing.
    pub fn from_entity(
        entity: entity::event_team_member::Model,
        user: Option<entity::user::Model>,
    ) -> Result<Self, AppError> {
        let name = user.map(|u| u.name).unwrap_or_else(|| entity.user_id.clone());

        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            team_id: entity.team_id,
            name,
            joined_at: entity.joined_at,
        })
    }

    pub fn into_dto(self) -> EventTeamMemberDto {
        EventTeamMemberDto {
            user_id: self.user_id,
            name: self.name,
            joined_at: self.joined_at,
        }
    }
}

/// Team together with its members ordered by join time.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTeamWithMembers {
    pub team: EventTeam,
    pub members: Vec<EventTeamMember>,
}

impl EventTeamWithMembers {
    pub fn is_member(&self, user_id: u64) -> bool {
        self.members.iter().any(|m| m.user_id == user_id)
    }

    /// Converts the team to a DTO as seen by `viewer_id`.
    ///
    /// The join code is only included when the viewer is on the team.
    pub fn into_dto(self, viewer_id: Option<u64>) -> EventTeamDto {
        let join_code = viewer_id
            .filter(|id| self.is_member(*id))
            .map(|_| self.team.join_code.clone());

        EventTeamDto {
            id: self.team.id,
            event_id: self.team.event_id,
            name: self.team.name,
            owner_id: self.team.owner_id,
            members: self
                .members
                .into_iter()
                .map(EventTeamMember::into_dto)
                .collect(),
            join_code,
        }
    }
}

/// Parameters for inserting a team row.
#[derive(Debug, Clone)]
pub struct CreateEventTeamParam {
    pub event_id: i32,
    pub owner_id: u64,
    pub name: String,
    pub join_code: String,
}
