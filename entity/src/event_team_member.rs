use sea_orm::entity::prelude::*;

/// Membership of a user in an event team.
///
/// Keyed by `(event_id, user_id)` so a user can hold at most one membership per event.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "event_team_member")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub team_id: i32,
    pub joined_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event_team::Entity",
        from = "Column::TeamId",
        to = "super::event_team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    EventTeam,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::DiscordId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::event_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventTeam.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
