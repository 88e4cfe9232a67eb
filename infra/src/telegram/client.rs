//! Telegram Bot API client implementation
//!
//! Plain HTTPS JSON against the Bot API. Failures surface immediately
//! to the caller; the polling loop in the bot process decides what to
//! do with them. The bot token is part of every request URL and must
//! never appear in logs.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use cg_shared::config::BotConfig;

use crate::InfraError;

use super::types::{
    ApiEnvelope, BotIdentity, GetUpdatesRequest, SendMessageRequest, Update,
};

/// Bot API client shared by the polling loop and reply sender
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    config: BotConfig,
}

impl TelegramClient {
    /// Create a new client
    pub fn new(config: BotConfig) -> Result<Self, InfraError> {
        if config.token.is_empty() {
            return Err(InfraError::Config("bot token is empty".to_string()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self { http, config })
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.config.api_base, self.config.token, method
        )
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, InfraError> {
        let response = self
            .http
            .post(self.method_url(method))
            .json(body)
            .send()
            .await?;

        let envelope: ApiEnvelope<T> = response.json().await?;
        if !envelope.ok {
            return Err(InfraError::Telegram(
                envelope
                    .description
                    .unwrap_or_else(|| format!("{} failed without description", method)),
            ));
        }

        envelope
            .result
            .ok_or_else(|| InfraError::Telegram(format!("{} returned no result", method)))
    }

    /// Verify the token and resolve the bot identity at startup
    pub async fn get_me(&self) -> Result<BotIdentity, InfraError> {
        let identity: BotIdentity = self.call("getMe", &serde_json::json!({})).await?;
        info!(
            bot_id = identity.id,
            username = identity.username.as_deref().unwrap_or("<unset>"),
            "Bot identity confirmed"
        );
        Ok(identity)
    }

    /// Long-poll for updates after the given offset
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, InfraError> {
        debug!(offset, "Polling for updates");
        self.call(
            "getUpdates",
            &GetUpdatesRequest {
                offset,
                timeout: self.config.poll_timeout,
                allowed_updates: &["message"],
            },
        )
        .await
    }

    /// Send a Markdown-formatted message to a chat
    ///
    /// Returns the sent message id.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<i64, InfraError> {
        let message: super::types::Message = self
            .call(
                "sendMessage",
                &SendMessageRequest {
                    chat_id,
                    text,
                    parse_mode: Some("Markdown"),
                },
            )
            .await?;

        debug!(chat_id, message_id = message.message_id, "Reply sent");
        Ok(message.message_id)
    }
}
