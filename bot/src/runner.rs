//! Long-polling update loop
//!
//! Polls `getUpdates`, dispatches each text message, and replies on the
//! same chat. Transport errors are logged and the loop continues after
//! a short pause; only startup failures are fatal to the process.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use cg_core::domain::entities::ProfileMetadata;
use cg_core::services::issuer::Issuer;
use cg_infra::telegram::{Message, TelegramClient, TelegramUser};

use crate::commands::Command;
use crate::replies;

/// Pause after a failed poll before trying again
const POLL_ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// The bot event loop, generic over the issuer variant selected at
/// startup
pub struct BotRunner<I: Issuer> {
    client: TelegramClient,
    issuer: Arc<I>,
}

impl<I: Issuer> BotRunner<I> {
    /// Create a runner over an established client and issuer
    pub fn new(client: TelegramClient, issuer: Arc<I>) -> Self {
        Self { client, issuer }
    }

    /// Poll forever
    pub async fn run(&self) {
        info!("Bot update loop started");
        let mut offset = 0i64;

        loop {
            let updates = match self.client.get_updates(offset).await {
                Ok(updates) => updates,
                Err(e) => {
                    warn!(error = %e, "Polling for updates failed");
                    tokio::time::sleep(POLL_ERROR_BACKOFF).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);
                if let Some(message) = update.message {
                    self.handle_message(message).await;
                }
            }
        }
    }

    async fn handle_message(&self, message: Message) {
        // Non-text updates (stickers, joins) are ignored entirely
        let Some(text) = message.text.as_deref() else {
            return;
        };
        let Some(from) = message.from.clone() else {
            return;
        };

        let reply = match Command::parse(text) {
            Command::Start | Command::Verify => self.issue_for(&from).await,
            Command::Help => replies::help(),
            Command::Other => replies::fallback(),
        };

        if let Err(e) = self.client.send_message(message.chat.id, &reply).await {
            error!(
                chat_id = message.chat.id,
                error = %e,
                event = "reply_failed",
                "Failed to send reply"
            );
        }
    }

    /// Issue a code for the sender and format the reply
    async fn issue_for(&self, from: &TelegramUser) -> String {
        let requester_id = from.id.to_string();
        let metadata = ProfileMetadata {
            username: from.username.clone(),
            first_name: from.first_name.clone(),
            last_name: from.last_name.clone(),
        };

        match self.issuer.issue(&requester_id, metadata).await {
            Ok(issued) => replies::code_issued(&issued, from.id),
            Err(e) => {
                error!(
                    requester_id = %requester_id,
                    error = %e,
                    event = "issuance_failed",
                    "Failed to issue verification code"
                );
                replies::issuance_failed()
            }
        }
    }
}
