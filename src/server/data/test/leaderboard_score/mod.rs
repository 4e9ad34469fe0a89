use crate::server::data::leaderboard_score::LeaderboardScoreRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_subjects;
mod get_by_leaderboard;
mod upsert;
