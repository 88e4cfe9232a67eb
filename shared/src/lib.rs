//! Shared utilities and common types for the CodeGate server
//!
//! This crate provides common functionality used by the bot and web
//! processes:
//! - Configuration types loaded from environment variables
//! - Response wrapper types
//! - Input validation helpers (verification code format, identifiers)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    BotConfig, CacheConfig, DatabaseConfig, ServerConfig, SessionConfig, StoreBackend,
    StoreConfig,
};
pub use types::{ApiResponse, ErrorResponse};
pub use utils::validation;
