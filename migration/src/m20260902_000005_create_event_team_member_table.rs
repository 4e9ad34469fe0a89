use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_user_table::User, m20260902_000003_create_event_table::Event,
    m20260902_000004_create_event_team_table::EventTeam,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventTeamMember::Table)
                    .if_not_exists()
                    .col(integer(EventTeamMember::EventId))
                    .col(string(EventTeamMember::UserId))
                    .col(integer(EventTeamMember::TeamId))
                    .col(
                        timestamp(EventTeamMember::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    // One membership per user per event
                    .primary_key(
                        Index::create()
                            .col(EventTeamMember::EventId)
                            .col(EventTeamMember::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_team_member_event_id")
                            .from(EventTeamMember::Table, EventTeamMember::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_team_member_team_id")
                            .from(EventTeamMember::Table, EventTeamMember::TeamId)
                            .to(EventTeam::Table, EventTeam::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_team_member_user_id")
                            .from(EventTeamMember::Table, EventTeamMember::UserId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_team_member_team_id")
                    .table(EventTeamMember::Table)
                    .col(EventTeamMember::TeamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventTeamMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventTeamMember {
    Table,
    EventId,
    UserId,
    TeamId,
    JoinedAt,
}
