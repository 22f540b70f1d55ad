use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};
use std::error::Error;
use tracing::{error, info};

use crate::config::{validate_db_name, DatabaseConfig};

/// Execute the create command
pub async fn execute(name: Option<String>) -> Result<(), Box<dyn Error>> {
    // Load configuration
    let config = DatabaseConfig::from_env()?;

    // Use provided name or default from config
    let db_name = name.unwrap_or_else(|| config.name.clone());
    validate_db_name(&db_name)?;

    info!("Creating database {} on {}:{}", db_name, config.host, config.port);

    // CREATE DATABASE must run from another database on the same server
    let connection = match Database::connect(config.maintenance_url()).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("Failed to connect to database server: {}", e);
            return Err(Box::new(e));
        }
    };

    let existing = connection
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [db_name.clone().into()],
        ))
        .await?;

    if existing.is_some() {
        info!("Database '{}' already exists", db_name);
        return Ok(());
    }

    match connection
        .execute(Statement::from_string(
            DbBackend::Postgres,
            format!("CREATE DATABASE \"{}\"", db_name),
        ))
        .await
    {
        Ok(_) => {
            info!("Database '{}' created successfully", db_name);
            Ok(())
        }
        Err(e) => {
            error!("Failed to create database: {}", e);
            Err(Box::new(e))
        }
    }
}
