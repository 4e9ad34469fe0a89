use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::u64_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventTeamDto {
    pub id: i32,
    pub event_id: i32,
    pub name: String,
    #[serde(with = "u64_string")]
    #[schema(value_type = String)]
    pub owner_id: u64,
    pub members: Vec<EventTeamMemberDto>,
    /// Only present when the requesting user is on the team.
    pub join_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventTeamMemberDto {
    #[serde(with = "u64_string")]
    #[schema(value_type = String)]
    pub user_id: u64,
    pub name: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventTeamDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventTeamDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JoinEventTeamDto {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JoinCodeDto {
    pub join_code: String,
}
