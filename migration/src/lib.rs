pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_leaderboard_score_table;
mod m20260902_000003_create_event_table;
mod m20260902_000004_create_event_team_table;
mod m20260902_000005_create_event_team_member_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_leaderboard_score_table::Migration),
            Box::new(m20260902_000003_create_event_table::Migration),
            Box::new(m20260902_000004_create_event_team_table::Migration),
            Box::new(m20260902_000005_create_event_team_member_table::Migration),
        ]
    }
}
