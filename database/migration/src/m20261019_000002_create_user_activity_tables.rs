use sea_orm_migration::prelude::*;

use crate::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("conversations").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Conversations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Conversations::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Conversations::UserId).integer().not_null())
                        .col(ColumnDef::new(Conversations::Message).text().not_null())
                        .col(ColumnDef::new(Conversations::Response).text().not_null())
                        .col(
                            ColumnDef::new(Conversations::Timestamp)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(Conversations::Context).text().null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_conversations_user_id")
                                .from(Conversations::Table, Conversations::UserId)
                                .to(Users::Table, Users::Id),
                        )
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("notifications").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Notifications::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Notifications::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Notifications::UserId).integer().not_null())
                        .col(
                            ColumnDef::new(Notifications::Title)
                                .string_len(200)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Notifications::Message).text().not_null())
                        .col(
                            ColumnDef::new(Notifications::NotificationType)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Notifications::IsRead)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Notifications::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Notifications::ReadAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notifications_user_id")
                                .from(Notifications::Table, Notifications::UserId)
                                .to(Users::Table, Users::Id),
                        )
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("mood_entries").await? {
            manager
                .create_table(
                    Table::create()
                        .table(MoodEntries::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MoodEntries::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(MoodEntries::UserId).integer().not_null())
                        // Both ratings are on a 1-10 scale
                        .col(
                            ColumnDef::new(MoodEntries::MoodRating)
                                .integer()
                                .not_null()
                                .check(Expr::col(MoodEntries::MoodRating).between(1, 10)),
                        )
                        .col(
                            ColumnDef::new(MoodEntries::EnergyLevel)
                                .integer()
                                .not_null()
                                .check(Expr::col(MoodEntries::EnergyLevel).between(1, 10)),
                        )
                        .col(ColumnDef::new(MoodEntries::Notes).text().null())
                        .col(
                            ColumnDef::new(MoodEntries::EntryDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MoodEntries::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_mood_entries_user_id")
                                .from(MoodEntries::Table, MoodEntries::UserId)
                                .to(Users::Table, Users::Id),
                        )
                        .to_owned(),
                )
                .await?;
        }

        // Lookups are always per user
        manager
            .create_index(
                Index::create()
                    .name("idx_conversations_user_id")
                    .table(Conversations::Table)
                    .col(Conversations::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_user_id")
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mood_entries_user_id")
                    .table(MoodEntries::Table)
                    .col(MoodEntries::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MoodEntries::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(Notifications::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(Conversations::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

// Conversations table
#[derive(Iden)]
enum Conversations {
    Table,
    Id,
    UserId,
    Message,
    Response,
    Timestamp,
    Context,
}

// Notifications table
#[derive(Iden)]
enum Notifications {
    Table,
    Id,
    UserId,
    Title,
    Message,
    NotificationType,
    IsRead,
    CreatedAt,
    ReadAt,
}

// Mood entries table
#[derive(Iden)]
enum MoodEntries {
    Table,
    Id,
    UserId,
    MoodRating,
    EnergyLevel,
    Notes,
    EntryDate,
    CreatedAt,
}
