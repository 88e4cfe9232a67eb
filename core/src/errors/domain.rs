//! Domain-specific error types for code issuance and redemption
//!
//! The redemption failure taxonomy is deliberately coarse: a wrong code
//! and an expired code both surface as `InvalidOrExpiredCode`, so the
//! web caller cannot distinguish existence from expiry.

use thiserror::Error;

/// Result alias used throughout the domain layer
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors produced by the issuer, redeemer, and session services
#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed input, rejected before any store access
    #[error("invalid value for field: {field}")]
    Validation { field: String },

    /// Uniform rejection for unknown, already-used, or expired codes
    #[error("invalid or expired verification code")]
    InvalidOrExpiredCode,

    /// Code store unreachable or failed mid-operation
    #[error("code store error: {message}")]
    Store { message: String },

    /// Profile store write failed after the code was consumed
    #[error("profile write failed: {message}")]
    ProfileWrite { message: String },

    /// Session token could not be issued or verified
    #[error("session error: {message}")]
    Session { message: String },
}

impl DomainError {
    /// Store failure with a message from the backing layer
    pub fn store(message: impl Into<String>) -> Self {
        DomainError::Store {
            message: message.into(),
        }
    }

    /// Profile write failure with a message from the backing layer
    pub fn profile_write(message: impl Into<String>) -> Self {
        DomainError::ProfileWrite {
            message: message.into(),
        }
    }

    /// Validation failure naming the offending field
    pub fn validation(field: impl Into<String>) -> Self {
        DomainError::Validation {
            field: field.into(),
        }
    }
}
