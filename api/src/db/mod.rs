// Database Module
// This module handles the relational store connection for the Rosalie API

pub mod error;
pub mod pool;

pub use error::DbError;
pub use pool::DbPool;
