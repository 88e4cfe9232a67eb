//! In-memory profile store for development and tests

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cg_core::domain::entities::VerifiedProfile;
use cg_core::errors::DomainResult;
use cg_core::store::ProfileStore;

/// Map-backed profile store
#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<String, VerifiedProfile>>,
}

impl MemoryProfileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored profile, for assertions and dev tooling
    pub async fn get(&self, requester_id: &str) -> Option<VerifiedProfile> {
        self.profiles.read().await.get(requester_id).cloned()
    }

    /// Number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    /// Whether no profiles have been written
    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn upsert_verified(&self, profile: VerifiedProfile) -> DomainResult<()> {
        self.profiles
            .write()
            .await
            .insert(profile.requester_id.clone(), profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cg_core::domain::entities::{ProfileMetadata, VerificationRecord};

    #[tokio::test]
    async fn upsert_is_idempotent() {
        let store = MemoryProfileStore::new();
        let record = VerificationRecord::new("42", ProfileMetadata::named("Alice"), 60);

        store
            .upsert_verified(VerifiedProfile::from_record(&record))
            .await
            .unwrap();
        store
            .upsert_verified(VerifiedProfile::from_record(&record))
            .await
            .unwrap();

        assert_eq!(store.len().await, 1);
        let profile = store.get("42").await.unwrap();
        assert_eq!(profile.metadata.first_name.as_deref(), Some("Alice"));
    }
}
