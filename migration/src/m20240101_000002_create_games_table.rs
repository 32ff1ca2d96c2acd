use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Games::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Games::UserId).string().not_null())
                    .col(ColumnDef::new(Games::SecretWord).string().not_null())
                    .col(
                        ColumnDef::new(Games::GuessedLetters)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Games::AttemptsAllowed).integer().not_null())
                    .col(
                        ColumnDef::new(Games::AttemptsRemaining)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::GameOver)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Games::Won).boolean().null())
                    .col(ColumnDef::new(Games::History).text().not_null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_user_id")
                            .from(Games::Table, Games::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for listing a user's unfinished games
        manager
            .create_index(
                Index::create()
                    .name("idx_games_user_id")
                    .table(Games::Table)
                    .col(Games::UserId)
                    .to_owned(),
            )
            .await?;

        // Index for the average-attempts scan over in-progress games
        manager
            .create_index(
                Index::create()
                    .name("idx_games_game_over")
                    .table(Games::Table)
                    .col(Games::GameOver)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Games {
    Table,
    Id,
    UserId,
    SecretWord,
    GuessedLetters,
    AttemptsAllowed,
    AttemptsRemaining,
    GameOver,
    Won,
    History,
    CreatedAt,
    UpdatedAt,
}
