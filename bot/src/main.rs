//! CodeGate bot process entry point
//!
//! Connects the configured code store backend, validates the bot token,
//! and runs the long-polling loop. A store that is unreachable at
//! startup halts the process.

mod commands;
mod replies;
mod runner;

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cg_core::services::issuer::{Issuer, IssuerConfig, IssuerService, QueueIssuerService};
use cg_infra::cache::RedisClient;
use cg_infra::store::{MemoryCodeStore, RedisCodeQueue, RedisCodeStore};
use cg_infra::telegram::TelegramClient;
use cg_shared::config::{BotConfig, CacheConfig, StoreBackend, StoreConfig};

use runner::BotRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    info!("Starting CodeGate bot");

    let bot_config = BotConfig::from_env().map_err(anyhow::Error::msg)?;
    let store_config = StoreConfig::from_env();
    let issuer_config = IssuerConfig::with_ttl(store_config.code_ttl_seconds);

    let client = TelegramClient::new(bot_config).context("failed to build Telegram client")?;

    // Confirm the token once at startup; a transient API failure here is
    // not fatal, the polling loop will keep surfacing it
    if let Err(e) = client.get_me().await {
        warn!(error = %e, "Could not confirm bot identity at startup");
    }

    match store_config.backend {
        StoreBackend::Memory => {
            let store = match store_config.snapshot_path {
                Some(path) => MemoryCodeStore::with_snapshot(path)
                    .context("failed to load code snapshot")?,
                None => MemoryCodeStore::new(),
            };
            let issuer = Arc::new(IssuerService::new(Arc::new(store), issuer_config));
            run(client, issuer).await
        }
        StoreBackend::Redis => {
            let redis = RedisClient::connect(CacheConfig::from_env())
                .await
                .context("code store unreachable at startup")?;
            let issuer = Arc::new(IssuerService::new(
                Arc::new(RedisCodeStore::new(redis)),
                issuer_config,
            ));
            run(client, issuer).await
        }
        StoreBackend::RedisQueue => {
            let redis = RedisClient::connect(CacheConfig::from_env())
                .await
                .context("code store unreachable at startup")?;
            let issuer = Arc::new(QueueIssuerService::new(
                Arc::new(RedisCodeQueue::new(redis)),
                issuer_config,
            ));
            run(client, issuer).await
        }
    }
}

/// Run the update loop over the chosen issuer variant
async fn run<I: Issuer + 'static>(client: TelegramClient, issuer: Arc<I>) -> anyhow::Result<()> {
    BotRunner::new(client, issuer).run().await;
    Ok(())
}
