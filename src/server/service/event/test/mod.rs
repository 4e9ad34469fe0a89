use chrono::{Duration, Utc};

use crate::server::{
    error::{team::TeamError, AppError},
    model::event::CreateEventParam,
    service::event::{lock::EventLocks, team::EventTeamService, EventService},
};
use test_utils::{builder::TestBuilder, factory};

mod create_team;
mod event;
mod leave_team;
mod list_teams;

/// Parses a factory-created Discord ID string.
fn id(discord_id: &str) -> u64 {
    discord_id.parse().unwrap()
}
