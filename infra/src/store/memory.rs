//! In-memory code store with optional file snapshot
//!
//! The store keeps the live map in memory and, when configured with a
//! snapshot path, rewrites the whole map to a JSON file after every
//! mutation. On construction the snapshot is read back and expired
//! entries are dropped, so a process restart reconstructs only the codes
//! that are still redeemable.

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use cg_core::domain::entities::VerificationRecord;
use cg_core::errors::{DomainError, DomainResult};
use cg_core::store::{CodeQueue, CodeStore};

use crate::InfraError;

/// Identity-keyed in-memory store, optionally persisted to a snapshot file
pub struct MemoryCodeStore {
    entries: RwLock<HashMap<String, VerificationRecord>>,
    snapshot_path: Option<PathBuf>,
}

impl MemoryCodeStore {
    /// Create a store without persistence (tests, ephemeral deployments)
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            snapshot_path: None,
        }
    }

    /// Create a store persisted to the given snapshot file
    ///
    /// Reads the snapshot if it exists; entries already past their
    /// expiry are dropped during reconstruction.
    pub fn with_snapshot(path: PathBuf) -> Result<Self, InfraError> {
        let mut entries: HashMap<String, VerificationRecord> = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(InfraError::Io(e)),
        };

        let before = entries.len();
        entries.retain(|_, record| !record.is_expired());
        info!(
            live = entries.len(),
            dropped = before - entries.len(),
            "Loaded code snapshot from {}",
            path.display()
        );

        Ok(Self {
            entries: RwLock::new(entries),
            snapshot_path: Some(path),
        })
    }

    /// Number of live entries (expired-but-unobserved included)
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Rewrite the snapshot file from the current map, dropping entries
    /// that have expired since they were written.
    async fn snapshot(
        &self,
        entries: &mut HashMap<String, VerificationRecord>,
    ) -> Result<(), InfraError> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };

        entries.retain(|_, record| !record.is_expired());
        let bytes = serde_json::to_vec(&*entries)?;
        tokio::fs::write(path, bytes).await?;
        debug!(live = entries.len(), "Snapshot written to {}", path.display());
        Ok(())
    }
}

impl Default for MemoryCodeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeStore for MemoryCodeStore {
    async fn put(&self, record: VerificationRecord) -> DomainResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(record.requester_id.clone(), record);
        self.snapshot(&mut entries)
            .await
            .map_err(|e| DomainError::store(e.to_string()))
    }

    async fn get(&self, requester_id: &str) -> DomainResult<Option<VerificationRecord>> {
        let mut entries = self.entries.write().await;
        match entries.get(requester_id) {
            Some(record) if record.is_expired() => {
                // Lazy expiry: observing an expired entry removes it
                entries.remove(requester_id);
                self.snapshot(&mut entries)
                    .await
                    .map_err(|e| DomainError::store(e.to_string()))?;
                Ok(None)
            }
            Some(record) => Ok(Some(record.clone())),
            None => Ok(None),
        }
    }

    async fn delete(&self, requester_id: &str) -> DomainResult<bool> {
        let mut entries = self.entries.write().await;
        let removed = entries.remove(requester_id).is_some();
        if removed {
            self.snapshot(&mut entries)
                .await
                .map_err(|e| DomainError::store(e.to_string()))?;
        }
        Ok(removed)
    }
}

struct QueueState {
    queue: VecDeque<VerificationRecord>,
    /// Per-requester expiry guard; queue entries themselves carry no
    /// enforced expiry
    guards: HashMap<String, VerificationRecord>,
}

/// In-process FIFO queue with the auxiliary expiry guard
///
/// Mirrors the Redis queue semantics for single-process deployments and
/// tests: `find_and_remove` drains entries, re-inserts the non-matching
/// remainder unchanged, and accepts a match only while the requester's
/// guard is live and agrees on the code value.
pub struct MemoryCodeQueue {
    state: Mutex<QueueState>,
}

impl MemoryCodeQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                queue: VecDeque::new(),
                guards: HashMap::new(),
            }),
        }
    }

    /// Number of outstanding queue entries
    pub async fn len(&self) -> usize {
        self.state.lock().await.queue.len()
    }
}

impl Default for MemoryCodeQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeQueue for MemoryCodeQueue {
    async fn enqueue(&self, record: VerificationRecord) -> DomainResult<()> {
        let mut state = self.state.lock().await;
        state
            .guards
            .insert(record.requester_id.clone(), record.clone());
        state.queue.push_back(record);
        Ok(())
    }

    async fn find_and_remove(&self, code: &str) -> DomainResult<Option<VerificationRecord>> {
        let mut state = self.state.lock().await;
        let mut remainder = VecDeque::with_capacity(state.queue.len());
        let mut found = None;

        while let Some(record) = state.queue.pop_front() {
            if found.is_some() || !record.matches(code) {
                remainder.push_back(record);
                continue;
            }

            match state.guards.get(&record.requester_id) {
                Some(guard) if !guard.is_expired() && guard.matches(&record.code) => {
                    // Guard first, entry second: a crash in between
                    // strands a dead entry instead of resurrecting a
                    // spent code
                    state.guards.remove(&record.requester_id);
                    found = Some(record);
                }
                Some(guard) if guard.is_expired() => {
                    // Entry and guard both dead
                    state.guards.remove(&record.requester_id);
                    warn!(
                        requester_id = %record.requester_id,
                        event = "queue_entry_dropped",
                        "Dropped queue entry with expired guard"
                    );
                }
                _ => {
                    // Superseded or guardless entry: drop it but leave
                    // any newer guard alone, and keep scanning; another
                    // requester may hold the same code value live.
                    warn!(
                        requester_id = %record.requester_id,
                        event = "queue_entry_dropped",
                        "Dropped superseded queue entry"
                    );
                }
            }
        }

        state.queue = remainder;
        Ok(found)
    }
}
