//! Redeemer service implementations for both store variants
//!
//! Failure behavior is deliberately uniform: unknown, already-used, and
//! expired codes are all reported as [`DomainError::InvalidOrExpiredCode`]
//! so the caller learns nothing about why the attempt failed. Malformed
//! input is rejected before the store is touched at all.

use std::sync::Arc;

use async_trait::async_trait;
use cg_shared::utils::validation;

use crate::domain::entities::{VerificationRecord, VerifiedProfile};
use crate::errors::{DomainError, DomainResult};
use crate::store::{CodeQueue, CodeStore, ProfileStore};

use super::types::{RedeemRequest, RedeemedUser};

/// Common interface over the two redeemer variants, so the HTTP layer
/// can stay generic over the configured store backend.
#[async_trait]
pub trait Redeemer: Send + Sync {
    /// Attempt to redeem a submitted code
    async fn redeem(&self, request: RedeemRequest) -> DomainResult<RedeemedUser>;
}

/// Redeemer over the identity-keyed code store
///
/// The caller supplies the requester identity together with the code;
/// matching is a direct key lookup plus a constant-time code comparison.
pub struct RedeemerService<S: CodeStore, P: ProfileStore> {
    codes: Arc<S>,
    profiles: Arc<P>,
}

impl<S: CodeStore, P: ProfileStore> RedeemerService<S, P> {
    /// Create a new redeemer over the given stores
    pub fn new(codes: Arc<S>, profiles: Arc<P>) -> Self {
        Self { codes, profiles }
    }

    /// Consume the matched record: invalidate it, then persist the
    /// verified profile. The code stays consumed even when the profile
    /// write fails (at-most-once semantics).
    async fn finish(
        profiles: &P,
        record: VerificationRecord,
    ) -> DomainResult<RedeemedUser> {
        let profile = VerifiedProfile::from_record(&record);
        let verified_at = profile.verified_at;

        profiles
            .upsert_verified(profile)
            .await
            .map_err(|e| match e {
                already @ DomainError::ProfileWrite { .. } => already,
                other => DomainError::profile_write(other.to_string()),
            })?;

        tracing::info!(
            requester_id = %record.requester_id,
            event = "code_redeemed",
            "Verification code redeemed, profile recorded"
        );

        Ok(RedeemedUser {
            requester_id: record.requester_id,
            profile: record.profile,
            verified_at,
        })
    }
}

#[async_trait]
impl<S: CodeStore, P: ProfileStore> Redeemer for RedeemerService<S, P> {
    async fn redeem(&self, request: RedeemRequest) -> DomainResult<RedeemedUser> {
        // Malformed input never reaches the store
        if !validation::is_valid_code(&request.code) {
            return Err(DomainError::validation("code"));
        }
        let requester_id = request
            .requester_id
            .as_deref()
            .filter(|id| validation::is_valid_requester_id(id))
            .ok_or_else(|| DomainError::validation("user_id"))?;

        let record = match self.codes.get(requester_id).await? {
            Some(record) => record,
            None => {
                tracing::warn!(
                    requester_id = requester_id,
                    event = "redeem_rejected",
                    "Redemption attempt with no active code"
                );
                return Err(DomainError::InvalidOrExpiredCode);
            }
        };

        // The store already treats expired entries as absent; re-check
        // here so a stale read can never redeem past the window.
        if record.is_expired() {
            let _ = self.codes.delete(requester_id).await;
            return Err(DomainError::InvalidOrExpiredCode);
        }

        if !record.matches(&request.code) {
            tracing::warn!(
                requester_id = requester_id,
                event = "redeem_rejected",
                "Redemption attempt with non-matching code"
            );
            return Err(DomainError::InvalidOrExpiredCode);
        }

        // Single-use: the record is gone before the profile write runs
        self.codes.delete(requester_id).await?;

        Self::finish(&self.profiles, record).await
    }
}

/// Redeemer over the code-keyed FIFO queue
///
/// The caller supplies only the code; the queue resolves the requester.
/// Any identity in the request is ignored.
pub struct QueueRedeemerService<Q: CodeQueue, P: ProfileStore> {
    queue: Arc<Q>,
    profiles: Arc<P>,
}

impl<Q: CodeQueue, P: ProfileStore> QueueRedeemerService<Q, P> {
    /// Create a new redeemer over the given queue and profile store
    pub fn new(queue: Arc<Q>, profiles: Arc<P>) -> Self {
        Self { queue, profiles }
    }
}

#[async_trait]
impl<Q: CodeQueue, P: ProfileStore> Redeemer for QueueRedeemerService<Q, P> {
    async fn redeem(&self, request: RedeemRequest) -> DomainResult<RedeemedUser> {
        if !validation::is_valid_code(&request.code) {
            return Err(DomainError::validation("code"));
        }

        let record = match self.queue.find_and_remove(&request.code).await? {
            Some(record) => record,
            None => {
                tracing::warn!(
                    event = "redeem_rejected",
                    "Redemption attempt with no matching queued code"
                );
                return Err(DomainError::InvalidOrExpiredCode);
            }
        };

        let profile = VerifiedProfile::from_record(&record);
        let verified_at = profile.verified_at;

        self.profiles
            .upsert_verified(profile)
            .await
            .map_err(|e| match e {
                already @ DomainError::ProfileWrite { .. } => already,
                other => DomainError::profile_write(other.to_string()),
            })?;

        tracing::info!(
            requester_id = %record.requester_id,
            event = "code_redeemed",
            "Verification code redeemed (queue variant), profile recorded"
        );

        Ok(RedeemedUser {
            requester_id: record.requester_id,
            profile: record.profile,
            verified_at,
        })
    }
}
