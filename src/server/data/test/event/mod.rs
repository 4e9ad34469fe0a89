use crate::server::{
    data::event::EventRepository, error::AppError, model::event::CreateEventParam,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_guild_paginated;
