//! Identity-keyed Redis code store
//!
//! Records are stored as JSON under `code:{requester_id}` (plus any
//! configured deployment prefix) with a Redis-enforced TTL. The read
//! path still re-checks the embedded expiry timestamp, so an entry that
//! Redis has not yet evicted is never reported as redeemable past its
//! window.

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use cg_core::domain::entities::VerificationRecord;
use cg_core::errors::{DomainError, DomainResult};
use cg_core::store::CodeStore;

use crate::cache::RedisClient;
use crate::InfraError;

/// Redis-backed identity-keyed code store
#[derive(Clone)]
pub struct RedisCodeStore {
    client: RedisClient,
}

impl RedisCodeStore {
    /// Create a store over an established Redis connection
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn code_key(&self, requester_id: &str) -> String {
        self.client.make_key(&format!("code:{}", requester_id))
    }

    async fn put_inner(&self, record: &VerificationRecord) -> Result<(), InfraError> {
        let key = self.code_key(&record.requester_id);
        let payload = serde_json::to_string(record)?;

        // Floor of one second so a record issued with a sub-second
        // remainder still lands in Redis rather than erroring on EX 0
        let ttl = (record.expires_at - Utc::now()).num_seconds().max(1) as u64;

        self.client.set_with_expiry(&key, &payload, ttl).await
    }

    async fn get_inner(
        &self,
        requester_id: &str,
    ) -> Result<Option<VerificationRecord>, InfraError> {
        let key = self.code_key(requester_id);
        let Some(payload) = self.client.get(&key).await? else {
            return Ok(None);
        };

        let record: VerificationRecord = serde_json::from_str(&payload)?;
        if record.is_expired() {
            debug!(requester_id, "Purging expired code entry observed in Redis");
            let _ = self.client.delete(&key).await;
            return Ok(None);
        }

        Ok(Some(record))
    }
}

#[async_trait]
impl CodeStore for RedisCodeStore {
    async fn put(&self, record: VerificationRecord) -> DomainResult<()> {
        self.put_inner(&record)
            .await
            .map_err(|e| DomainError::store(e.to_string()))
    }

    async fn get(&self, requester_id: &str) -> DomainResult<Option<VerificationRecord>> {
        self.get_inner(requester_id)
            .await
            .map_err(|e| DomainError::store(e.to_string()))
    }

    async fn delete(&self, requester_id: &str) -> DomainResult<bool> {
        self.client
            .delete(&self.code_key(requester_id))
            .await
            .map_err(|e| DomainError::store(e.to_string()))
    }
}
