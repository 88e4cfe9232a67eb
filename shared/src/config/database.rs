//! Database configuration module

use serde::{Deserialize, Serialize};

/// MySQL connection configuration for the verified-profile store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub connect_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/codegate"),
            max_connections: 10,
            connect_timeout: 10,
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration with the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "mysql://localhost:3306/codegate".to_string()),
            max_connections: super::env_parse("DATABASE_MAX_CONNECTIONS", 10),
            connect_timeout: super::env_parse("DATABASE_CONNECT_TIMEOUT", 10),
        }
    }
}
