use crate::server::{
    data::event_team::EventTeamRepository, error::AppError, model::team::CreateEventTeamParam,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
