//! Issuer service implementations for both store variants

use std::sync::Arc;

use async_trait::async_trait;
use cg_shared::utils::validation;

use crate::domain::entities::{ProfileMetadata, VerificationRecord};
use crate::errors::{DomainError, DomainResult};
use crate::store::{CodeQueue, CodeStore};

use super::config::IssuerConfig;
use super::types::IssuedCode;

/// Common interface over the two issuer variants, so the bot process can
/// stay generic over the configured store backend.
#[async_trait]
pub trait Issuer: Send + Sync {
    /// Generate a code for the requester and persist it
    async fn issue(
        &self,
        requester_id: &str,
        profile: ProfileMetadata,
    ) -> DomainResult<IssuedCode>;
}

/// Issuer over the identity-keyed code store
///
/// Each call performs exactly one store write, overwriting any prior
/// record for the requester so at most one code is active per identity.
pub struct IssuerService<S: CodeStore> {
    store: Arc<S>,
    config: IssuerConfig,
}

impl<S: CodeStore> IssuerService<S> {
    /// Create a new issuer over the given store
    pub fn new(store: Arc<S>, config: IssuerConfig) -> Self {
        Self { store, config }
    }
}

#[async_trait]
impl<S: CodeStore> Issuer for IssuerService<S> {
    async fn issue(
        &self,
        requester_id: &str,
        profile: ProfileMetadata,
    ) -> DomainResult<IssuedCode> {
        if !validation::is_valid_requester_id(requester_id) {
            return Err(DomainError::validation("requester_id"));
        }

        let record =
            VerificationRecord::new(requester_id, profile, self.config.code_ttl_seconds);
        let issued = IssuedCode {
            code: record.code.clone(),
            expires_at: record.expires_at,
            ttl_seconds: self.config.code_ttl_seconds,
        };

        // A store failure here leaves nothing partial behind: the single
        // put is the only side effect of issuance.
        self.store.put(record).await?;

        // The code value itself is never logged
        tracing::info!(
            requester_id = requester_id,
            expires_at = %issued.expires_at,
            event = "code_issued",
            "Issued verification code"
        );

        Ok(issued)
    }
}

/// Issuer over the code-keyed FIFO queue
///
/// The queue implementation writes both the FIFO entry and the auxiliary
/// per-requester expiry guard; multiple outstanding codes may coexist.
pub struct QueueIssuerService<Q: CodeQueue> {
    queue: Arc<Q>,
    config: IssuerConfig,
}

impl<Q: CodeQueue> QueueIssuerService<Q> {
    /// Create a new issuer over the given queue
    pub fn new(queue: Arc<Q>, config: IssuerConfig) -> Self {
        Self { queue, config }
    }
}

#[async_trait]
impl<Q: CodeQueue> Issuer for QueueIssuerService<Q> {
    async fn issue(
        &self,
        requester_id: &str,
        profile: ProfileMetadata,
    ) -> DomainResult<IssuedCode> {
        if !validation::is_valid_requester_id(requester_id) {
            return Err(DomainError::validation("requester_id"));
        }

        let record =
            VerificationRecord::new(requester_id, profile, self.config.code_ttl_seconds);
        let issued = IssuedCode {
            code: record.code.clone(),
            expires_at: record.expires_at,
            ttl_seconds: self.config.code_ttl_seconds,
        };

        self.queue.enqueue(record).await?;

        tracing::info!(
            requester_id = requester_id,
            expires_at = %issued.expires_at,
            event = "code_issued",
            "Issued verification code (queue variant)"
        );

        Ok(issued)
    }
}
