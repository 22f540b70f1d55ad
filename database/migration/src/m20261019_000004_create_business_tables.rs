use sea_orm_migration::prelude::*;

use crate::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("businesses").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Businesses::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Businesses::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Businesses::UserId).integer().not_null())
                        .col(ColumnDef::new(Businesses::Name).string_len(200).not_null())
                        .col(ColumnDef::new(Businesses::Description).text().null())
                        .col(
                            ColumnDef::new(Businesses::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Businesses::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_businesses_user_id")
                                .from(Businesses::Table, Businesses::UserId)
                                .to(Users::Table, Users::Id),
                        )
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("projects").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Projects::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Projects::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Projects::BusinessId).integer().not_null())
                        .col(ColumnDef::new(Projects::Name).string_len(200).not_null())
                        .col(ColumnDef::new(Projects::Description).text().null())
                        .col(
                            ColumnDef::new(Projects::Status)
                                .string_len(50)
                                .not_null()
                                .default("pending"),
                        )
                        .col(
                            ColumnDef::new(Projects::Priority)
                                .string_len(20)
                                .not_null()
                                .default("medium"),
                        )
                        .col(
                            ColumnDef::new(Projects::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Projects::Deadline)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Projects::ProgressPercentage)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_projects_business_id")
                                .from(Projects::Table, Projects::BusinessId)
                                .to(Businesses::Table, Businesses::Id),
                        )
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("tasks").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Tasks::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Tasks::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Tasks::ProjectId).integer().not_null())
                        .col(ColumnDef::new(Tasks::Title).string_len(200).not_null())
                        .col(ColumnDef::new(Tasks::Description).text().null())
                        .col(
                            ColumnDef::new(Tasks::Status)
                                .string_len(50)
                                .not_null()
                                .default("pending"),
                        )
                        .col(
                            ColumnDef::new(Tasks::Priority)
                                .string_len(20)
                                .not_null()
                                .default("medium"),
                        )
                        .col(ColumnDef::new(Tasks::EstimatedHours).double().null())
                        .col(ColumnDef::new(Tasks::ActualHours).double().null().default(0.0))
                        .col(
                            ColumnDef::new(Tasks::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(Tasks::DueDate).timestamp_with_time_zone().null())
                        .col(
                            ColumnDef::new(Tasks::CompletedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_tasks_project_id")
                                .from(Tasks::Table, Tasks::ProjectId)
                                .to(Projects::Table, Projects::Id),
                        )
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_business_id")
                    .table(Projects::Table)
                    .col(Projects::BusinessId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_project_status")
                    .table(Tasks::Table)
                    .col(Tasks::ProjectId)
                    .col(Tasks::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first, nothing cascades
        manager
            .drop_table(Table::drop().table(Tasks::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Businesses::Table).if_exists().to_owned())
            .await
    }
}

// Businesses table
#[derive(Iden)]
enum Businesses {
    Table,
    Id,
    UserId,
    Name,
    Description,
    CreatedAt,
    IsActive,
}

// Projects table
#[derive(Iden)]
enum Projects {
    Table,
    Id,
    BusinessId,
    Name,
    Description,
    Status,
    Priority,
    CreatedAt,
    Deadline,
    ProgressPercentage,
}

// Tasks table
#[derive(Iden)]
enum Tasks {
    Table,
    Id,
    ProjectId,
    Title,
    Description,
    Status,
    Priority,
    EstimatedHours,
    ActualHours,
    CreatedAt,
    DueDate,
    CompletedAt,
}
