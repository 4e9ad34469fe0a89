//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner, an active event and a team owned by that user.
///
/// All entities use default values. Use the individual factories to customize them.
///
/// # Returns
/// - `Ok((owner, event, team))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::event::Model,
        entity::event_team::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let event = crate::factory::event::create_event(db).await?;
    let team = crate::factory::event_team::create_team(db, event.id, &owner.discord_id).await?;

    Ok((owner, event, team))
}
