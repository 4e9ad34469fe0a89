use crate::{
    model::leaderboard::ScoreDataType,
    server::{
        error::{leaderboard::LeaderboardError, AppError},
        model::leaderboard::LeaderboardDefinitionConfig,
        service::leaderboard::{
            registry::LeaderboardRegistry, store::LeaderboardStore, LeaderboardService,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod get_rank;
mod remove_subject;

fn definition(
    id: &str,
    profile: bool,
    minimum_score: f64,
    limit: usize,
    score_data_type: ScoreDataType,
) -> LeaderboardDefinitionConfig {
    LeaderboardDefinitionConfig {
        id: id.to_string(),
        title: format!("{} title", id),
        short_title: None,
        category: "General".to_string(),
        profile,
        minimum_score,
        limit,
        score_data_type,
    }
}

/// Registry used across the service tests.
///
/// - `farming-weight` - profile scoped decimal, minimum 100
/// - `skyblock-xp` - profile scoped integer
/// - `achievement-points` - account scoped integer
/// - `top-two` - profile scoped, retains two entries
fn test_registry() -> LeaderboardRegistry {
    LeaderboardRegistry::from_configs(vec![
        definition("farming-weight", true, 100.0, 5000, ScoreDataType::Decimal),
        definition("skyblock-xp", true, 0.0, 5000, ScoreDataType::Integer),
        definition("achievement-points", false, 0.0, 5000, ScoreDataType::Integer),
        definition("top-two", true, 0.0, 2, ScoreDataType::Integer),
    ])
    .unwrap()
}
