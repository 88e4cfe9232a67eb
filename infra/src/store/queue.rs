//! Code-keyed Redis FIFO queue with auxiliary expiry guard
//!
//! Queue entries live in a Redis list and carry no enforced expiry of
//! their own; the per-requester entry written through [`RedisCodeStore`]
//! acts as the expiry guard. Redemption is accepted only when a queued
//! entry matches the submitted code AND the requester's guard is still
//! present with an equal stored code.
//!
//! The two structures are not updated atomically. Orderings are chosen
//! so a crash between the writes can only strand a dead queue entry,
//! never resurrect a spent or expired code: issuance writes the guard
//! before the entry, redemption deletes the guard before dropping the
//! entry. Stranded entries are pruned the next time a scan observes
//! them.

use async_trait::async_trait;
use tracing::{debug, warn};

use cg_core::domain::entities::VerificationRecord;
use cg_core::errors::{DomainError, DomainResult};
use cg_core::store::{CodeQueue, CodeStore};

use crate::cache::RedisClient;
use crate::store::RedisCodeStore;
use crate::InfraError;

/// Redis-backed code-keyed queue
#[derive(Clone)]
pub struct RedisCodeQueue {
    client: RedisClient,
    guards: RedisCodeStore,
}

impl RedisCodeQueue {
    /// Create a queue over an established Redis connection
    pub fn new(client: RedisClient) -> Self {
        let guards = RedisCodeStore::new(client.clone());
        Self { client, guards }
    }

    fn queue_key(&self) -> String {
        self.client.make_key("queue")
    }

    /// Outstanding queue entries, including dead ones not yet pruned
    pub async fn len(&self) -> Result<usize, InfraError> {
        self.client.list_len(&self.queue_key()).await
    }

    /// Re-insert skipped entries at the head of the list, in reverse
    /// drain order so their original relative order is preserved.
    async fn restore(&self, key: &str, skipped: &[String]) -> DomainResult<()> {
        for payload in skipped.iter().rev() {
            self.client
                .push_front(key, payload)
                .await
                .map_err(store_err)?;
        }
        Ok(())
    }
}

fn store_err(e: InfraError) -> DomainError {
    DomainError::store(e.to_string())
}

#[async_trait]
impl CodeQueue for RedisCodeQueue {
    async fn enqueue(&self, record: VerificationRecord) -> DomainResult<()> {
        // Guard first, entry second
        self.guards.put(record.clone()).await?;

        let payload = serde_json::to_string(&record).map_err(|e| DomainError::store(e.to_string()))?;
        self.client
            .push_back(&self.queue_key(), &payload)
            .await
            .map_err(store_err)
    }

    async fn find_and_remove(&self, code: &str) -> DomainResult<Option<VerificationRecord>> {
        let key = self.queue_key();
        let mut skipped: Vec<String> = Vec::new();
        let mut found = None;

        loop {
            let Some(payload) = self.client.pop_front(&key).await.map_err(store_err)? else {
                break;
            };

            let record: VerificationRecord = match serde_json::from_str(&payload) {
                Ok(record) => record,
                Err(e) => {
                    warn!(error = %e, "Dropping undecodable queue entry");
                    continue;
                }
            };

            if !record.matches(code) {
                skipped.push(payload);
                continue;
            }

            match self.guards.get(&record.requester_id).await {
                Ok(Some(guard)) if guard.matches(&record.code) => {
                    // Guard deleted first; see the module note on
                    // crash ordering
                    let _ = self.guards.delete(&record.requester_id).await;
                    found = Some(record);
                    break;
                }
                Ok(_) => {
                    // Guard expired, missing, or superseded: the entry
                    // is dead. Keep scanning; another requester may
                    // hold the same code value with a live guard.
                    debug!(
                        requester_id = %record.requester_id,
                        event = "queue_entry_dropped",
                        "Dropped queue entry with dead expiry guard"
                    );
                }
                Err(e) => {
                    // Store failure mid-scan: put the popped entry back
                    // so it is not lost, then surface the error
                    skipped.push(payload);
                    self.restore(&key, &skipped).await?;
                    return Err(e);
                }
            }
        }

        self.restore(&key, &skipped).await?;
        Ok(found)
    }
}
