//! Mapping from domain errors to HTTP responses
//!
//! One deliberate property: wrong codes and expired codes produce the
//! exact same 401 body, so a web caller cannot probe which codes exist.

use actix_web::HttpResponse;

use cg_core::errors::DomainError;
use cg_shared::types::response::ErrorResponse;

/// Convert a domain error into the HTTP response sent to the caller
pub fn domain_error_response(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { field } => {
            tracing::warn!(field = %field, event = "request_rejected", "Malformed input");
            HttpResponse::BadRequest().json(ErrorResponse::new(
                "invalid_request",
                "Enter your user ID and the 4-digit code",
            ))
        }
        DomainError::InvalidOrExpiredCode => HttpResponse::Unauthorized().json(
            ErrorResponse::new("invalid_code", "Invalid or expired code"),
        ),
        DomainError::ProfileWrite { message } => {
            tracing::error!(error = %message, event = "profile_write_failed", "Profile write failed");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "write_failed",
                "Verification could not be recorded, please request a new code",
            ))
        }
        DomainError::Store { message } => {
            tracing::error!(error = %message, event = "store_unavailable", "Code store error");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "service_unavailable",
                "Verification service is temporarily unavailable",
            ))
        }
        DomainError::Session { .. } => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "invalid_session",
            "Session is invalid or expired",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            domain_error_response(DomainError::validation("code")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            domain_error_response(DomainError::InvalidOrExpiredCode).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            domain_error_response(DomainError::profile_write("down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            domain_error_response(DomainError::store("down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
