// Handlers Module
// This module contains the API endpoint handlers

pub mod connectivity;
pub mod diagnostic;
pub mod health;

use std::sync::Arc;

use crate::cache::RedisStore;
use crate::db::DbPool;

pub use connectivity::{test_database, test_redis};
pub use diagnostic::diagnose_database;
pub use health::read_root;

/// Process-wide handles shared by every request
pub struct AppState {
    pub db: DbPool,
    pub cache: RedisStore,
}

// Type alias for the application state
pub type SharedState = Arc<AppState>;
