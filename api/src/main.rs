//! CodeGate web process entry point
//!
//! Wires the configured code store backend to the redeemer, connects
//! the profile database, and serves the HTTP surface. A store or
//! database that is unreachable at startup halts the process.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cg_core::services::redeemer::{QueueRedeemerService, Redeemer, RedeemerService};
use cg_core::services::session::SessionService;
use cg_infra::cache::RedisClient;
use cg_infra::profile::MySqlProfileStore;
use cg_infra::store::{MemoryCodeStore, RedisCodeQueue, RedisCodeStore};
use cg_shared::config::{
    CacheConfig, DatabaseConfig, ServerConfig, SessionConfig, StoreBackend, StoreConfig,
};

use cg_api::app::create_app;
use cg_api::routes::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().expect("valid directive")))
        .init();

    info!("Starting CodeGate API server");

    let server_config = ServerConfig::from_env();
    let store_config = StoreConfig::from_env();
    let session_config = SessionConfig::from_env();

    let profiles = Arc::new(
        MySqlProfileStore::connect(&DatabaseConfig::from_env())
            .await
            .map_err(fatal)?,
    );
    let sessions = Arc::new(SessionService::new(session_config.clone()));

    match store_config.backend {
        StoreBackend::Memory => {
            let store = match store_config.snapshot_path {
                Some(path) => MemoryCodeStore::with_snapshot(path).map_err(fatal)?,
                None => MemoryCodeStore::new(),
            };
            let redeemer = Arc::new(RedeemerService::new(Arc::new(store), profiles));
            serve(redeemer, sessions, session_config, server_config).await
        }
        StoreBackend::Redis => {
            let client = RedisClient::connect(CacheConfig::from_env())
                .await
                .map_err(fatal)?;
            let store = Arc::new(RedisCodeStore::new(client));
            let redeemer = Arc::new(RedeemerService::new(store, profiles));
            serve(redeemer, sessions, session_config, server_config).await
        }
        StoreBackend::RedisQueue => {
            let client = RedisClient::connect(CacheConfig::from_env())
                .await
                .map_err(fatal)?;
            let queue = Arc::new(RedisCodeQueue::new(client));
            let redeemer = Arc::new(QueueRedeemerService::new(queue, profiles));
            serve(redeemer, sessions, session_config, server_config).await
        }
    }
}

/// Run the HTTP server over the chosen redeemer variant
async fn serve<R>(
    redeemer: Arc<R>,
    sessions: Arc<SessionService>,
    session_config: SessionConfig,
    server_config: ServerConfig,
) -> std::io::Result<()>
where
    R: Redeemer + 'static,
{
    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let state = web::Data::new(AppState {
        redeemer,
        sessions,
        session_config,
    });

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }
    server.bind(&bind_address)?.run().await
}

/// Startup failures halt the process
fn fatal<E: std::fmt::Display>(error: E) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
}
