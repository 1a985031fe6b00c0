//! Booking API router.
//!
//! Returns a composable `Router` with all endpoints nested under
//! `/api/`. When the configured static directory exists, everything
//! outside `/api/` falls through to it (the bundled front-end assets).
//!
//! NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::api::endpoints;
use crate::config;
use crate::state::AppState;

/// Build the booking API router.
pub fn api_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/appointments",
            get(endpoints::appointments::list).post(endpoints::appointments::create),
        )
        .route(
            "/appointments/:id",
            get(endpoints::appointments::detail)
                .put(endpoints::appointments::update)
                .delete(endpoints::appointments::remove),
        )
        .with_state(state);

    let router = Router::new().nest("/api", api).layer(CorsLayer::permissive());

    // Front-end assets, when bundled next to the data dir.
    let static_dir = config::static_dir();
    if static_dir.is_dir() {
        router.fallback_service(ServeDir::new(static_dir))
    } else {
        router
    }
}
