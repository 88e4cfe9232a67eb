//! Code store traits defining the interface for pending-code persistence.
//!
//! Implementations live in the infrastructure layer (in-memory with file
//! snapshot, Redis keyed store, Redis queue). Expiry is enforced at read
//! time: an expired-but-present entry is reported absent and deleted as a
//! side effect of being observed.

use async_trait::async_trait;

use crate::domain::entities::VerificationRecord;
use crate::errors::DomainResult;

/// Identity-keyed code store: at most one active record per requester
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use cg_core::store::CodeStore;
/// use cg_core::domain::entities::VerificationRecord;
/// use cg_core::errors::DomainResult;
///
/// struct NullStore;
///
/// #[async_trait]
/// impl CodeStore for NullStore {
///     async fn put(&self, _record: VerificationRecord) -> DomainResult<()> {
///         Ok(())
///     }
///
///     async fn get(&self, _requester_id: &str) -> DomainResult<Option<VerificationRecord>> {
///         Ok(None)
///     }
///
///     async fn delete(&self, _requester_id: &str) -> DomainResult<bool> {
///         Ok(false)
///     }
/// }
/// ```
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Store a record, overwriting any prior record for the same
    /// requester. Exactly one write; no uniqueness check against other
    /// requesters' codes.
    async fn put(&self, record: VerificationRecord) -> DomainResult<()>;

    /// Fetch the active record for a requester
    ///
    /// Returns `None` for absent entries and for entries past their
    /// expiry timestamp; observing an expired entry deletes it.
    async fn get(&self, requester_id: &str) -> DomainResult<Option<VerificationRecord>>;

    /// Remove the record for a requester
    ///
    /// Returns `true` if an entry was removed, `false` if none existed.
    async fn delete(&self, requester_id: &str) -> DomainResult<bool>;
}

/// Code-keyed FIFO store for the cross-process queue variant
///
/// Queue entries carry no enforced expiry of their own; implementations
/// maintain an auxiliary per-requester TTL entry and accept a match only
/// while that guard is present with an equal stored code.
#[async_trait]
pub trait CodeQueue: Send + Sync {
    /// Append a record to the queue and write its expiry guard
    async fn enqueue(&self, record: VerificationRecord) -> DomainResult<()>;

    /// Remove and return the first redeemable entry whose code matches
    ///
    /// Entries that do not match are re-inserted unchanged, preserving
    /// their relative order. A matching entry whose expiry guard is gone
    /// or disagrees is dead: it is dropped and the scan continues, since
    /// another requester may hold the same code value with a live guard.
    async fn find_and_remove(&self, code: &str) -> DomainResult<Option<VerificationRecord>>;
}
