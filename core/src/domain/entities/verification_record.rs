//! Verification record entity for chat-issued login codes.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 4;

/// Display fields captured from the chat user at issuance time and
/// carried with the code for the later profile write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    /// Chat username, if the user has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// First name as reported by the chat platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name as reported by the chat platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl ProfileMetadata {
    /// Metadata with only a first name, the common case on Telegram
    pub fn named(first_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            ..Default::default()
        }
    }
}

/// A pending verification code awaiting redemption
///
/// Created by the issuer on every code request, stored with a fixed
/// validity window, and destroyed on redemption or expiry. Codes are not
/// unique across requesters; the store key (requester identity or code
/// value, depending on the deployment variant) disambiguates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Opaque stable identifier of the chat user who requested the code
    pub requester_id: String,

    /// The 4-digit verification code, leading zeros allowed
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Display metadata carried for the profile write on redemption
    #[serde(default)]
    pub profile: ProfileMetadata,
}

impl VerificationRecord {
    /// Create a new record with a freshly generated random code
    ///
    /// # Arguments
    ///
    /// * `requester_id` - Chat-side identity requesting the code
    /// * `profile` - Display metadata to carry through redemption
    /// * `ttl_seconds` - Validity window for the code
    pub fn new(
        requester_id: impl Into<String>,
        profile: ProfileMetadata,
        ttl_seconds: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            requester_id: requester_id.into(),
            code: Self::generate_code(),
            issued_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
            profile,
        }
    }

    /// Generate a code of [`CODE_LENGTH`] independently uniform decimal
    /// digits. No uniqueness guarantee; collisions across requesters are
    /// an accepted residual risk.
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        (0..CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }

    /// Whether the validity window has passed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Time remaining until expiry, zero if already expired
    pub fn ttl_remaining(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }

    /// Constant-time comparison against a candidate code
    ///
    /// Length is checked first; same-length comparison does not
    /// short-circuit on the first differing digit.
    pub fn matches(&self, candidate: &str) -> bool {
        self.code.len() == candidate.len()
            && constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = VerificationRecord::new("42", ProfileMetadata::default(), 60);
        assert_eq!(record.requester_id, "42");
        assert_eq!(record.code.len(), CODE_LENGTH);
        assert!(!record.is_expired());
        assert_eq!(record.expires_at, record.issued_at + Duration::seconds(60));
    }

    #[test]
    fn test_generated_codes_are_all_digits() {
        // Every character must be a decimal digit, leading zeros allowed
        for _ in 0..200 {
            let record = VerificationRecord::new("42", ProfileMetadata::default(), 60);
            assert_eq!(record.code.len(), CODE_LENGTH);
            assert!(record.code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_codes_vary() {
        let codes: std::collections::HashSet<String> = (0..100)
            .map(|_| VerificationRecord::new("42", ProfileMetadata::default(), 60).code)
            .collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_expiry() {
        let record = VerificationRecord::new("42", ProfileMetadata::default(), -1);
        assert!(record.is_expired());
        assert_eq!(record.ttl_remaining(), Duration::zero());
    }

    #[test]
    fn test_matches() {
        let mut record = VerificationRecord::new("42", ProfileMetadata::default(), 60);
        record.code = "0123".to_string();

        assert!(record.matches("0123"));
        assert!(!record.matches("0124"));
        assert!(!record.matches("123"));
        assert!(!record.matches("01234"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = VerificationRecord::new(
            "42",
            ProfileMetadata {
                username: Some("alice".to_string()),
                first_name: Some("Alice".to_string()),
                last_name: None,
            },
            60,
        );

        let json = serde_json::to_string(&record).unwrap();
        let restored: VerificationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }
}
