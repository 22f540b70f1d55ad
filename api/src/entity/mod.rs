//! Entity module for database models
//!
//! Mirrors the tables created by the `migration` crate, which owns the schema.

pub mod businesses;
pub mod conversations;
pub mod financial_accounts;
pub mod mood_entries;
pub mod notifications;
pub mod prelude;
pub mod projects;
pub mod tasks;
pub mod transactions;
pub mod users;

use std::ops::RangeInclusive;

use sea_orm::{entity::prelude::DateTimeUtc, ActiveValue, DbErr};

/// Scale shared by mood ratings and energy levels
pub const RATING_SCALE: RangeInclusive<i32> = 1..=10;

/// Initial status of projects and tasks
pub const DEFAULT_STATUS: &str = "pending";

/// Initial priority of projects and tasks
pub const DEFAULT_PRIORITY: &str = "medium";

/// Fills a timestamp column with the current time if it was left unset
fn default_now(value: &mut ActiveValue<DateTimeUtc>) {
    if let ActiveValue::NotSet = value {
        *value = ActiveValue::Set(chrono::Utc::now());
    }
}

/// Rejects a newly set rating outside `RATING_SCALE`
fn check_rating(column: &str, value: &ActiveValue<i32>) -> Result<(), DbErr> {
    match value {
        ActiveValue::Set(rating) if !RATING_SCALE.contains(rating) => Err(DbErr::Custom(format!(
            "{} must be between {} and {}, got {}",
            column,
            RATING_SCALE.start(),
            RATING_SCALE.end(),
            rating
        ))),
        _ => Ok(()),
    }
}
