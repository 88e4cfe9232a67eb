//! DTOs for the verification and session endpoints

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use cg_shared::utils::validation;

/// Body of `POST /api/v1/verify`
///
/// `user_id` is required by the identity-keyed deployment and ignored by
/// the queue deployment, so it is optional at the wire level; the
/// redeemer enforces its presence where it matters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyRequest {
    #[validate(length(min = 1, max = 64))]
    pub user_id: Option<String>,

    #[validate(length(equal = 4), custom = "validate_code_digits")]
    pub code: String,
}

fn validate_code_digits(code: &str) -> Result<(), ValidationError> {
    if validation::is_valid_code(code) {
        Ok(())
    } else {
        Err(ValidationError::new("code_digits"))
    }
}

/// Body returned by `POST /api/v1/verify`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// Body returned by `GET /api/v1/session`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
