use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeaderboardScore::Table)
                    .if_not_exists()
                    .col(pk_auto(LeaderboardScore::Id))
                    .col(string(LeaderboardScore::LeaderboardId))
                    .col(string(LeaderboardScore::SubjectId))
                    .col(double(LeaderboardScore::Score))
                    .col(
                        timestamp(LeaderboardScore::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leaderboard_score_leaderboard_subject")
                    .table(LeaderboardScore::Table)
                    .col(LeaderboardScore::LeaderboardId)
                    .col(LeaderboardScore::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leaderboard_score_subject")
                    .table(LeaderboardScore::Table)
                    .col(LeaderboardScore::SubjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaderboardScore::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeaderboardScore {
    Table,
    Id,
    LeaderboardId,
    SubjectId,
    Score,
    UpdatedAt,
}
