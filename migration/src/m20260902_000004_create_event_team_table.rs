use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260901_000001_create_user_table::User, m20260902_000003_create_event_table::Event};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(EventTeam::Id))
                    .col(integer(EventTeam::EventId))
                    .col(string(EventTeam::OwnerId))
                    .col(string(EventTeam::Name))
                    .col(string_uniq(EventTeam::JoinCode))
                    .col(
                        timestamp(EventTeam::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_team_event_id")
                            .from(EventTeam::Table, EventTeam::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_team_owner_id")
                            .from(EventTeam::Table, EventTeam::OwnerId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventTeam {
    Table,
    Id,
    EventId,
    OwnerId,
    Name,
    JoinCode,
    CreatedAt,
}
