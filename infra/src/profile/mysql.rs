//! MySQL verified-profile store
//!
//! Backing table:
//!
//! ```sql
//! CREATE TABLE verified_users (
//!     user_id     VARCHAR(64)  NOT NULL PRIMARY KEY,
//!     username    VARCHAR(255) NULL,
//!     first_name  VARCHAR(255) NULL,
//!     last_name   VARCHAR(255) NULL,
//!     verified_at DATETIME(6)  NOT NULL,
//!     status      VARCHAR(16)  NOT NULL
//! );
//! ```
//!
//! The single write is an idempotent upsert keyed by `user_id`; every
//! successful redemption overwrites the row.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{error, info};

use cg_core::domain::entities::VerifiedProfile;
use cg_core::errors::{DomainError, DomainResult};
use cg_core::store::ProfileStore;
use cg_shared::config::DatabaseConfig;

use crate::InfraError;

/// MySQL-backed profile store
#[derive(Clone)]
pub struct MySqlProfileStore {
    pool: MySqlPool,
}

impl MySqlProfileStore {
    /// Wrap an existing connection pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Connect a new pool from configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, InfraError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .connect(&config.url)
            .await?;

        info!("Connected to profile database");
        Ok(Self { pool })
    }
}

#[async_trait]
impl ProfileStore for MySqlProfileStore {
    async fn upsert_verified(&self, profile: VerifiedProfile) -> DomainResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO verified_users
                (user_id, username, first_name, last_name, verified_at, status)
            VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                username = VALUES(username),
                first_name = VALUES(first_name),
                last_name = VALUES(last_name),
                verified_at = VALUES(verified_at),
                status = VALUES(status)
            "#,
        )
        .bind(&profile.requester_id)
        .bind(&profile.metadata.username)
        .bind(&profile.metadata.first_name)
        .bind(&profile.metadata.last_name)
        .bind(profile.verified_at)
        .bind(profile.status.as_str())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                info!(
                    requester_id = %profile.requester_id,
                    event = "profile_upserted",
                    "Verified profile written"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    requester_id = %profile.requester_id,
                    error = %e,
                    event = "profile_write_failed",
                    "Failed to write verified profile"
                );
                Err(DomainError::profile_write(e.to_string()))
            }
        }
    }
}
