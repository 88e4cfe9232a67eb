//! Verified profile entity persisted after successful redemption.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::verification_record::{ProfileMetadata, VerificationRecord};

/// Verification status of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Active,
}

impl ProfileStatus {
    /// Database/string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStatus::Active => "active",
        }
    }
}

/// A verified user as written to the profile store
///
/// Keyed by requester identity and idempotently overwritten on every
/// successful redemption. The profile store is write-only from this
/// crate's perspective and never consulted for code validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedProfile {
    /// Chat-side identity that redeemed the code
    pub requester_id: String,

    /// Display metadata carried from issuance
    pub metadata: ProfileMetadata,

    /// When the redemption completed
    pub verified_at: DateTime<Utc>,

    /// Verification status
    pub status: ProfileStatus,
}

impl VerifiedProfile {
    /// Build the profile written for a successfully redeemed record
    pub fn from_record(record: &VerificationRecord) -> Self {
        Self {
            requester_id: record.requester_id.clone(),
            metadata: record.profile.clone(),
            verified_at: Utc::now(),
            status: ProfileStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_carries_metadata() {
        let record = VerificationRecord::new(
            "7",
            ProfileMetadata {
                username: Some("bob".to_string()),
                first_name: Some("Bob".to_string()),
                last_name: Some("Smith".to_string()),
            },
            60,
        );

        let profile = VerifiedProfile::from_record(&record);
        assert_eq!(profile.requester_id, "7");
        assert_eq!(profile.metadata, record.profile);
        assert_eq!(profile.status, ProfileStatus::Active);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ProfileStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        assert_eq!(ProfileStatus::Active.as_str(), "active");
    }
}
