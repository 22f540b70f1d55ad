//! Prelude module for convenient imports

pub use super::businesses::Entity as Businesses;
pub use super::conversations::Entity as Conversations;
pub use super::financial_accounts::Entity as FinancialAccounts;
pub use super::mood_entries::Entity as MoodEntries;
pub use super::notifications::Entity as Notifications;
pub use super::projects::Entity as Projects;
pub use super::tasks::Entity as Tasks;
pub use super::transactions::Entity as Transactions;
pub use super::users::Entity as Users;
