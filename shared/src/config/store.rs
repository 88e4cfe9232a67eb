//! Code store configuration module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Default validity window for verification codes, in seconds
pub const DEFAULT_CODE_TTL_SECONDS: i64 = 60;

/// Which backing the code store uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreBackend {
    /// Process-local map with optional file snapshot (single-process
    /// deployments and tests)
    Memory,
    /// Redis keyed by requester identity (two-process deployments)
    Redis,
    /// Redis FIFO queue keyed by code value, with an auxiliary
    /// per-requester expiry guard
    RedisQueue,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(StoreBackend::Memory),
            "redis" => Ok(StoreBackend::Redis),
            "redis-queue" => Ok(StoreBackend::RedisQueue),
            other => Err(format!("unknown store backend: {}", other)),
        }
    }
}

/// Code store configuration shared by the bot and web processes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Store backend selection
    pub backend: StoreBackend,

    /// Validity window for issued codes, in seconds
    pub code_ttl_seconds: i64,

    /// Snapshot file path for the memory backend; `None` disables
    /// persistence across restarts
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Redis,
            code_ttl_seconds: DEFAULT_CODE_TTL_SECONDS,
            snapshot_path: None,
        }
    }
}

impl StoreConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            backend: super::env_parse("CODE_STORE_BACKEND", StoreBackend::Redis),
            code_ttl_seconds: super::env_parse("CODE_TTL_SECONDS", DEFAULT_CODE_TTL_SECONDS),
            snapshot_path: std::env::var("CODE_SNAPSHOT_PATH").ok().map(PathBuf::from),
        }
    }
}
