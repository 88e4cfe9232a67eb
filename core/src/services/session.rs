//! Web session token service
//!
//! Signed, self-contained session tokens carried in an opaque cookie.
//! A token is minted only after a successful redemption, so holding a
//! valid token is equivalent to the `verified` flag being set.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cg_shared::config::SessionConfig;

use crate::errors::{DomainError, DomainResult};

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Requester identity the session belongs to
    pub sub: String,
    /// Always true for minted sessions; kept explicit for the
    /// session-status endpoint
    pub verified: bool,
    /// Token identifier
    pub jti: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Issues and verifies session tokens (HS256)
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: SessionConfig,
}

impl SessionService {
    /// Create a new session service from configuration
    pub fn new(config: SessionConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            config,
        }
    }

    /// Mint a session token for a freshly verified requester
    pub fn issue_session(&self, requester_id: &str) -> DomainResult<String> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: requester_id.to_string(),
            verified: true,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.config.ttl_hours)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Session {
                message: format!("failed to sign session token: {}", e),
            }
        })
    }

    /// Verify a session token and return its claims
    ///
    /// Expired, tampered, and malformed tokens all fail verification.
    pub fn verify_session(&self, token: &str) -> DomainResult<SessionClaims> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(
            |e| DomainError::Session {
                message: format!("invalid session token: {}", e),
            },
        )?;

        if !data.claims.verified {
            return Err(DomainError::Session {
                message: "session is not verified".to_string(),
            });
        }

        Ok(data.claims)
    }

    /// Session lifetime, for cookie max-age
    pub fn ttl(&self) -> Duration {
        Duration::hours(self.config.ttl_hours)
    }
}
