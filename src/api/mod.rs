//! HTTP layer for the booking service.
//!
//! Routes are nested under `/api/`; the router is composable —
//! [`api_router`] returns a `Router` that can be mounted on any axum
//! server instance. All decision logic lives in `validate` and
//! `db::repository`; handlers here just wire them to HTTP.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::api_router;
pub use server::{start_server, ApiServer};
