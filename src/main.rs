use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bookline::state::AppState;
use bookline::{api, config, db};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let db_path = config::database_path();
    if let Some(parent) = db_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::error!("Cannot create data directory {}: {e}", parent.display());
            std::process::exit(1);
        }
    }

    // Schema is created here, once, at startup; per-request opens find
    // it already in place.
    match db::sqlite::open_database(&db_path) {
        Ok(_) => tracing::info!(path = %db_path.display(), "Database ready"),
        Err(e) => {
            tracing::error!("Database initialization failed: {e}");
            std::process::exit(1);
        }
    }

    let state = Arc::new(AppState::new(db_path));
    let mut server = match api::start_server(state, config::bind_addr()).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %server.addr, "{} listening", config::APP_NAME);

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Signal handler error: {e}");
    }
    server.shutdown();
}
