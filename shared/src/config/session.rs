//! Session token and cookie configuration module

use serde::{Deserialize, Serialize};

/// Name of the session cookie set on successful verification
pub const DEFAULT_COOKIE_NAME: &str = "cg_session";

/// Session configuration for the web process
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Secret used to sign session tokens
    pub secret: String,

    /// Session lifetime in hours
    pub ttl_hours: i64,

    /// Name of the session cookie
    pub cookie_name: String,

    /// Whether the cookie is marked `Secure` (HTTPS only)
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-change-me"),
            ttl_hours: 24,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            secure: false,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "development-secret-change-me".to_string()),
            ttl_hours: super::env_parse("SESSION_TTL_HOURS", 24),
            cookie_name: std::env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| DEFAULT_COOKIE_NAME.to_string()),
            secure: super::env_parse("SESSION_COOKIE_SECURE", false),
        }
    }
}
