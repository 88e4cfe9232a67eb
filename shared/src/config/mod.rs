//! Configuration module with per-concern sub-modules
//!
//! Each sub-module owns the settings for one external concern:
//! - `server` - HTTP server bind address
//! - `cache` - Redis connection for the shared code store
//! - `database` - MySQL connection for the verified-profile store
//! - `bot` - Telegram Bot API credentials and polling
//! - `session` - Session token signing and cookie settings
//! - `store` - Code store backend selection, TTL and snapshot path
//!
//! Every config struct provides `Default` values suitable for local
//! development and a `from_env()` constructor used by the binaries.

pub mod bot;
pub mod cache;
pub mod database;
pub mod server;
pub mod session;
pub mod store;

pub use bot::BotConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;
pub use store::{StoreBackend, StoreConfig};

/// Read an environment variable and parse it, falling back to a default
/// when unset or unparseable.
pub(crate) fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
