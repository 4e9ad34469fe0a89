use sea_orm::entity::prelude::*;

/// Persisted score of one subject on one leaderboard.
///
/// The auto-incremented `id` records first-insertion order, which is the tie-break used when
/// rankings are rebuilt from this table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "leaderboard_score")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub leaderboard_id: String,
    pub subject_id: String,
    #[sea_orm(column_type = "Double")]
    pub score: f64,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
