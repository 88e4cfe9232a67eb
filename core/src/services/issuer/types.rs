//! Types for issuer service results

use chrono::{DateTime, Utc};

/// Result of issuing a verification code
///
/// Returned to the chat layer for display to the requester; the code
/// value must never be sent anywhere but the originating chat channel.
#[derive(Debug, Clone)]
pub struct IssuedCode {
    /// The generated 4-digit code
    pub code: String,

    /// When the code stops being redeemable
    pub expires_at: DateTime<Utc>,

    /// Validity window in seconds, for user-facing display
    pub ttl_seconds: i64,
}
