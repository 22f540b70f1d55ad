pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_users_table;
mod m20261019_000002_create_user_activity_tables;
mod m20261019_000003_create_finance_tables;
mod m20261019_000004_create_business_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_users_table::Migration),
            Box::new(m20261019_000002_create_user_activity_tables::Migration),
            Box::new(m20261019_000003_create_finance_tables::Migration),
            Box::new(m20261019_000004_create_business_tables::Migration),
        ]
    }
}

/// Every table owned by the schema, parents before children
pub const TABLES: [&str; 9] = [
    "users",
    "conversations",
    "notifications",
    "mood_entries",
    "financial_accounts",
    "transactions",
    "businesses",
    "projects",
    "tasks",
];

/// Users table definition, shared by the migrations that reference it
#[derive(Iden)]
pub(crate) enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Preferences,
    CreatedAt,
    UpdatedAt,
}
