use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Reasons an event or event team operation is rejected.
///
/// Every variant is a recoverable, caller-reported condition.
#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Event {0} not found")]
    EventNotFound(i32),

    #[error("Team {0} not found")]
    TeamNotFound(i32),

    #[error("Event {0} is not active")]
    EventNotActive(i32),

    #[error("User {user_id} is already on a team for event {event_id}")]
    UserAlreadyOnTeam { user_id: u64, event_id: i32 },

    #[error("Team {0} is full")]
    TeamFull(i32),

    #[error("Invalid join code for team {0}")]
    InvalidJoinCode(i32),

    #[error("User {user_id} is not the owner of team {team_id}")]
    NotOwner { user_id: u64, team_id: i32 },

    #[error("User {user_id} is not a member of team {team_id}")]
    NotTeamMember { user_id: u64, team_id: i32 },

    #[error("Team owners cannot kick themselves, leave or delete the team instead")]
    CannotKickSelf,
}

/// Converts team errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - Unknown event or team
/// - 403 Forbidden - Caller does not own or belong to the team
/// - 409 Conflict - Membership conflicts and full teams
/// - 400 Bad Request - Wrong join code, inactive event, self-kick
impl IntoResponse for TeamError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::EventNotFound(_) | Self::TeamNotFound(_) => StatusCode::NOT_FOUND,
            Self::NotOwner { .. } | Self::NotTeamMember { .. } => StatusCode::FORBIDDEN,
            Self::UserAlreadyOnTeam { .. } | Self::TeamFull(_) => StatusCode::CONFLICT,
            Self::InvalidJoinCode(_) | Self::EventNotActive(_) | Self::CannotKickSelf => {
                StatusCode::BAD_REQUEST
            }
        };

        error_response(status, self.to_string())
    }
}
