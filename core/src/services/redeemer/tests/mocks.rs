//! Mock stores for redemption tests
//!
//! The code store mock counts every call so tests can assert that
//! malformed input never touches the store at all.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::{VerificationRecord, VerifiedProfile};
use crate::errors::{DomainError, DomainResult};
use crate::store::{CodeQueue, CodeStore, ProfileStore};

/// Map-backed code store with lazy expiry and call counting
#[derive(Default)]
pub struct MapCodeStore {
    entries: Mutex<HashMap<String, VerificationRecord>>,
    pub calls: AtomicUsize,
}

impl MapCodeStore {
    pub fn with_record(record: VerificationRecord) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .unwrap()
            .insert(record.requester_id.clone(), record);
        store
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn contains(&self, requester_id: &str) -> bool {
        self.entries.lock().unwrap().contains_key(requester_id)
    }
}

#[async_trait]
impl CodeStore for MapCodeStore {
    async fn put(&self, record: VerificationRecord) -> DomainResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(record.requester_id.clone(), record);
        Ok(())
    }

    async fn get(&self, requester_id: &str) -> DomainResult<Option<VerificationRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        match entries.get(requester_id) {
            Some(record) if record.is_expired() => {
                entries.remove(requester_id);
                Ok(None)
            }
            Some(record) => Ok(Some(record.clone())),
            None => Ok(None),
        }
    }

    async fn delete(&self, requester_id: &str) -> DomainResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.lock().unwrap().remove(requester_id).is_some())
    }
}

/// Profile store recording every upsert, optionally failing
#[derive(Default)]
pub struct MockProfileStore {
    pub upserts: Mutex<Vec<VerifiedProfile>>,
    pub fail_writes: bool,
}

impl MockProfileStore {
    pub fn failing() -> Self {
        Self {
            upserts: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    pub fn upsert_count(&self) -> usize {
        self.upserts.lock().unwrap().len()
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn upsert_verified(&self, profile: VerifiedProfile) -> DomainResult<()> {
        if self.fail_writes {
            return Err(DomainError::profile_write("database unreachable"));
        }
        self.upserts.lock().unwrap().push(profile);
        Ok(())
    }
}

/// FIFO queue mock with per-record expiry checks
#[derive(Default)]
pub struct MockCodeQueue {
    entries: Mutex<VecDeque<VerificationRecord>>,
    pub calls: AtomicUsize,
}

impl MockCodeQueue {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl CodeQueue for MockCodeQueue {
    async fn enqueue(&self, record: VerificationRecord) -> DomainResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().push_back(record);
        Ok(())
    }

    async fn find_and_remove(&self, code: &str) -> DomainResult<Option<VerificationRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        let mut remainder = VecDeque::new();
        let mut found = None;

        while let Some(record) = entries.pop_front() {
            if found.is_none() && record.matches(code) {
                if record.is_expired() {
                    // Dead entry: drop it and keep scanning
                    continue;
                }
                found = Some(record);
            } else {
                remainder.push_back(record);
            }
        }

        *entries = remainder;
        Ok(found)
    }
}
