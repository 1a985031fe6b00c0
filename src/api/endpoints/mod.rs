//! API endpoint handlers.

pub mod appointments;
pub mod health;
