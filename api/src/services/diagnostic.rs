// Database diagnostic service implementation

use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, EntityName, EntityTrait, PaginatorTrait,
};

use crate::db::DbError;
use crate::entity::prelude::*;
use crate::models::{DiagnosticResponse, TableCount};

/// Service for database diagnostics
pub struct DiagnosticService<'a> {
    conn: &'a DatabaseConnection,
}

impl<'a> DiagnosticService<'a> {
    /// Creates a new diagnostic service over a database connection
    pub fn new(conn: &'a DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Reports the backend kind and the row count of every schema table
    pub async fn diagnose(&self) -> Result<DiagnosticResponse, DbError> {
        let backend = match self.conn {
            DatabaseConnection::Disconnected => {
                return Err(DbError::ConnectionError("connection is closed".to_string()))
            }
            conn => match conn.get_database_backend() {
                DbBackend::Postgres => "PostgreSQL",
                DbBackend::MySql => "MySQL",
                DbBackend::Sqlite => "SQLite",
            },
        };

        let tables = vec![
            self.count(Users).await?,
            self.count(Conversations).await?,
            self.count(Notifications).await?,
            self.count(MoodEntries).await?,
            self.count(FinancialAccounts).await?,
            self.count(Transactions).await?,
            self.count(Businesses).await?,
            self.count(Projects).await?,
            self.count(Tasks).await?,
        ];

        Ok(DiagnosticResponse { backend, tables })
    }

    async fn count<E>(&self, entity: E) -> Result<TableCount, DbError>
    where
        E: EntityTrait,
        E::Model: Sync + 'static,
    {
        let rows = E::find().count(self.conn).await?;
        Ok(TableCount {
            table: entity.table_name().to_string(),
            rows,
        })
    }
}
