//! Telegram bot configuration module

use serde::{Deserialize, Serialize};

/// Telegram Bot API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    /// Bot token issued by BotFather
    pub token: String,

    /// Base URL of the Bot API (overridable for a local test server)
    pub api_base: String,

    /// Long-poll timeout in seconds for `getUpdates`
    pub poll_timeout: u64,

    /// Per-request HTTP timeout in seconds; must exceed `poll_timeout`
    pub request_timeout: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_base: String::from("https://api.telegram.org"),
            poll_timeout: 30,
            request_timeout: 40,
        }
    }
}

impl BotConfig {
    /// Create from environment variables
    ///
    /// Returns an error string when the bot token is missing, since the
    /// bot process cannot start without it.
    pub fn from_env() -> Result<Self, String> {
        let token = std::env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| "TELEGRAM_BOT_TOKEN not set".to_string())?;
        if token.is_empty() {
            return Err("TELEGRAM_BOT_TOKEN is empty".to_string());
        }

        Ok(Self {
            token,
            api_base: std::env::var("TELEGRAM_API_BASE")
                .unwrap_or_else(|_| "https://api.telegram.org".to_string()),
            poll_timeout: super::env_parse("TELEGRAM_POLL_TIMEOUT", 30),
            request_timeout: super::env_parse("TELEGRAM_REQUEST_TIMEOUT", 40),
        })
    }
}
