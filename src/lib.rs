//! Bookline — a small self-hosted appointment booking service.
//!
//! Clients book, view, edit and cancel timed appointments over a local
//! HTTP API. The interesting parts are the pure field validator
//! ([`validate`]) and the SQLite-backed appointment store ([`db`]);
//! the axum layer ([`api`]) is thin plumbing around them.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod state;
pub mod validate;
