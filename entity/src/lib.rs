//! SeaORM entity models for every table owned by the service.

pub mod prelude;

pub mod event;
pub mod event_team;
pub mod event_team_member;
pub mod leaderboard_score;
pub mod user;
