//! Profile store trait for persisting verified users.

use async_trait::async_trait;

use crate::domain::entities::VerifiedProfile;
use crate::errors::DomainResult;

/// Write-only sink for verified-user records
///
/// The upsert is idempotent and keyed by requester identity; every
/// successful redemption overwrites the row. This store is never the
/// source of truth for code validity, and a failed write does not roll
/// back code consumption.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert or overwrite the verified profile for a requester
    async fn upsert_verified(&self, profile: VerifiedProfile) -> DomainResult<()>;
}
