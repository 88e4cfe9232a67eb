//! # Infrastructure Layer
//!
//! Concrete implementations of the CodeGate store traits and external
//! service clients:
//!
//! - **Cache**: Redis client used by the cross-process code store
//! - **Store**: code store backings (in-memory with file snapshot,
//!   Redis keyed store, Redis FIFO queue)
//! - **Profile**: MySQL verified-profile store (plus an in-memory one
//!   for development and tests)
//! - **Telegram**: Bot API client used by the bot process

pub mod cache;
pub mod profile;
pub mod store;
pub mod telegram;

use cg_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    /// Redis cache error
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Snapshot file I/O error
    #[error("snapshot i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Record serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Telegram Bot API rejected a request
    #[error("telegram api error: {0}")]
    Telegram(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<InfraError> for DomainError {
    fn from(err: InfraError) -> Self {
        DomainError::store(err.to_string())
    }
}
