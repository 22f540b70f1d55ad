// Service implementations behind the HTTP handlers

pub mod connectivity;
pub mod diagnostic;
pub mod health;
