use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Bookline";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen port, overridable with the `PORT` env var.
pub const DEFAULT_PORT: u16 = 5000;

/// Get the application data directory
/// ~/Bookline/ on all platforms (user-visible on purpose)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Bookline")
}

/// Path of the appointments database, overridable with `BOOKLINE_DB`.
pub fn database_path() -> PathBuf {
    std::env::var_os("BOOKLINE_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|| app_data_dir().join("appointments.db"))
}

/// Directory of front-end assets served as-is when it exists,
/// overridable with `BOOKLINE_STATIC`.
pub fn static_dir() -> PathBuf {
    std::env::var_os("BOOKLINE_STATIC")
        .map(PathBuf::from)
        .unwrap_or_else(|| app_data_dir().join("static"))
}

/// Loopback listen address. The service is local-only; putting it
/// behind a reverse proxy is the deployment's concern.
pub fn bind_addr() -> SocketAddr {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    SocketAddr::from(([127, 0, 0, 1], port))
}
