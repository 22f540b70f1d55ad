use migration::{DbErr, MigrationTrait, Migrator, MigratorTrait, SchemaManager, TABLES};
use sea_orm_migration::sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement,
};

async fn memory_db() -> DatabaseConnection {
    // A single connection keeps every query on the same in-memory database
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opts).await.expect("in-memory sqlite")
}

async fn exec(db: &DatabaseConnection, sql: &str) -> Result<(), DbErr> {
    db.execute(Statement::from_string(DbBackend::Sqlite, sql.to_string()))
        .await
        .map(|_| ())
}

#[tokio::test]
async fn test_up_creates_every_table() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(manager.has_table(table).await.unwrap(), "missing table {}", table);
    }
    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_schema_setup_is_idempotent() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    // Re-running each migration body against an existing schema must not fail either
    let manager = SchemaManager::new(&db);
    for migration in Migrator::migrations() {
        migration.up(&manager).await.unwrap();
    }

    let applied = Migrator::get_applied_migrations(&db).await.unwrap();
    assert_eq!(applied.len(), Migrator::migrations().len());
}

#[tokio::test]
async fn test_down_drops_every_table() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();
    Migrator::down(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(!manager.has_table(table).await.unwrap(), "table {} survived", table);
    }
}

#[tokio::test]
async fn test_child_row_requires_existing_parent() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();

    let orphan = exec(
        &db,
        "INSERT INTO transactions (account_id, amount, description, category, transaction_date, is_income) \
         VALUES (42, 10.5, 'coffee', 'food', '2026-10-19T08:00:00Z', false)",
    )
    .await;
    assert!(orphan.is_err());

    exec(
        &db,
        "INSERT INTO users (name, email, password_hash) VALUES ('Ada', 'ada@example.com', 'x')",
    )
    .await
    .unwrap();
    exec(
        &db,
        "INSERT INTO financial_accounts (user_id, institution_name, account_type, account_number_masked) \
         VALUES (1, 'First Bank', 'checking', '****1234')",
    )
    .await
    .unwrap();
    exec(
        &db,
        "INSERT INTO transactions (account_id, amount, description, category, transaction_date, is_income) \
         VALUES (1, 10.5, 'coffee', 'food', '2026-10-19T08:00:00Z', false)",
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_email_is_unique() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();

    let insert = "INSERT INTO users (name, email, password_hash) VALUES ('Ada', 'ada@example.com', 'x')";
    exec(&db, insert).await.unwrap();
    assert!(exec(&db, insert).await.is_err());
}

#[tokio::test]
async fn test_mood_rating_is_bounded() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();
    exec(
        &db,
        "INSERT INTO users (name, email, password_hash) VALUES ('Ada', 'ada@example.com', 'x')",
    )
    .await
    .unwrap();

    let out_of_range = exec(
        &db,
        "INSERT INTO mood_entries (user_id, mood_rating, energy_level, entry_date) \
         VALUES (1, 11, 5, '2026-10-19T08:00:00Z')",
    )
    .await;
    assert!(out_of_range.is_err());

    exec(
        &db,
        "INSERT INTO mood_entries (user_id, mood_rating, energy_level, entry_date) \
         VALUES (1, 10, 1, '2026-10-19T08:00:00Z')",
    )
    .await
    .unwrap();
}
