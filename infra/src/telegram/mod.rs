//! Telegram Bot API client

pub mod client;
pub mod types;

pub use client::TelegramClient;
pub use types::{Chat, Message, TelegramUser, Update};
