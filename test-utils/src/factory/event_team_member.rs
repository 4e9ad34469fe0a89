//! Event team membership factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds `user_id` to the given team.
///
/// The event id is taken from the team so the membership key stays consistent.
///
/// # Returns
/// - `Ok(entity::event_team_member::Model)` - Created membership
/// - `Err(DbErr)` - Database error, including a key conflict when the user already has a
///   membership for the event
pub async fn create_member(
    db: &DatabaseConnection,
    team: &entity::event_team::Model,
    user_id: &str,
) -> Result<entity::event_team_member::Model, DbErr> {
    entity::event_team_member::ActiveModel {
        event_id: ActiveValue::Set(team.event_id),
        user_id: ActiveValue::Set(user_id.to_string()),
        team_id: ActiveValue::Set(team.id),
        joined_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
