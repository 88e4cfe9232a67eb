//! Configuration for the issuer service

use cg_shared::config::store::DEFAULT_CODE_TTL_SECONDS;

/// Configuration for code issuance
#[derive(Debug, Clone)]
pub struct IssuerConfig {
    /// Validity window for issued codes, in seconds
    pub code_ttl_seconds: i64,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: DEFAULT_CODE_TTL_SECONDS,
        }
    }
}

impl IssuerConfig {
    /// Configuration with an explicit TTL
    pub fn with_ttl(code_ttl_seconds: i64) -> Self {
        Self { code_ttl_seconds }
    }
}
