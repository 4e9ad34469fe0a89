use crate::server::{data::event_team_member::EventTeamMemberRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod get_by_teams;
mod remove;
