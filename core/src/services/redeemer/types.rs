//! Types for redemption requests and results

use chrono::{DateTime, Utc};

use crate::domain::entities::ProfileMetadata;

/// A redemption attempt from the web side
#[derive(Debug, Clone)]
pub struct RedeemRequest {
    /// Requester identity, required by the identity-keyed variant and
    /// ignored by the code-keyed queue variant
    pub requester_id: Option<String>,

    /// The submitted 4-digit code
    pub code: String,
}

impl RedeemRequest {
    /// Request carrying both identity and code
    pub fn with_requester(requester_id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            requester_id: Some(requester_id.into()),
            code: code.into(),
        }
    }

    /// Request carrying only the code (queue variant)
    pub fn code_only(code: impl Into<String>) -> Self {
        Self {
            requester_id: None,
            code: code.into(),
        }
    }
}

/// Outcome of a successful redemption
#[derive(Debug, Clone)]
pub struct RedeemedUser {
    /// The resolved requester identity
    pub requester_id: String,

    /// Display metadata carried from issuance
    pub profile: ProfileMetadata,

    /// When the redemption completed
    pub verified_at: DateTime<Utc>,
}
