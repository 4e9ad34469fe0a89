//! Leaderboard score factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a persisted score row.
///
/// Rows are ranked in insertion order on ties, so tests create them in the order they
/// expect ties to resolve.
pub async fn create_score(
    db: &DatabaseConnection,
    leaderboard_id: &str,
    subject_id: &str,
    score: f64,
) -> Result<entity::leaderboard_score::Model, DbErr> {
    entity::leaderboard_score::ActiveModel {
        leaderboard_id: ActiveValue::Set(leaderboard_id.to_string()),
        subject_id: ActiveValue::Set(subject_id.to_string()),
        score: ActiveValue::Set(score),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
