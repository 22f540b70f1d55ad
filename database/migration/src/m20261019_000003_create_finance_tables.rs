use sea_orm_migration::prelude::*;

use crate::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("financial_accounts").await? {
            manager
                .create_table(
                    Table::create()
                        .table(FinancialAccounts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(FinancialAccounts::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(FinancialAccounts::UserId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FinancialAccounts::InstitutionName)
                                .string_len(200)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FinancialAccounts::AccountType)
                                .string_len(50)
                                .not_null(),
                        )
                        // Only the redacted form of the account number is ever stored
                        .col(
                            ColumnDef::new(FinancialAccounts::AccountNumberMasked)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FinancialAccounts::Balance)
                                .double()
                                .not_null()
                                .default(0.0),
                        )
                        .col(
                            ColumnDef::new(FinancialAccounts::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(FinancialAccounts::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_financial_accounts_user_id")
                                .from(FinancialAccounts::Table, FinancialAccounts::UserId)
                                .to(Users::Table, Users::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_financial_accounts_user_id")
                        .table(FinancialAccounts::Table)
                        .col(FinancialAccounts::UserId)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("transactions").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Transactions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Transactions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Transactions::AccountId).integer().not_null())
                        .col(ColumnDef::new(Transactions::Amount).double().not_null())
                        .col(
                            ColumnDef::new(Transactions::Description)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::Category)
                                .string_len(100)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::TransactionDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(Transactions::IsIncome).boolean().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_transactions_account_id")
                                .from(Transactions::Table, Transactions::AccountId)
                                .to(FinancialAccounts::Table, FinancialAccounts::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_transactions_account_date")
                        .table(Transactions::Table)
                        .col(Transactions::AccountId)
                        .col(Transactions::TransactionDate)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(FinancialAccounts::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

// Financial accounts table
#[derive(Iden)]
enum FinancialAccounts {
    Table,
    Id,
    UserId,
    InstitutionName,
    AccountType,
    AccountNumberMasked,
    Balance,
    CreatedAt,
    IsActive,
}

// Transactions table
#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    AccountId,
    Amount,
    Description,
    Category,
    TransactionDate,
    CreatedAt,
    IsIncome,
}
