//! Handler for POST /api/v1/verify

use std::sync::Arc;

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{web, HttpResponse};
use validator::Validate;

use cg_core::services::redeemer::{RedeemRequest, Redeemer};
use cg_core::services::session::SessionService;
use cg_shared::config::SessionConfig;
use cg_shared::types::response::ErrorResponse;

use crate::dto::{VerifyRequest, VerifyResponse};
use crate::handlers::domain_error_response;

/// Application state shared by the HTTP handlers
pub struct AppState<R: Redeemer> {
    pub redeemer: Arc<R>,
    pub sessions: Arc<SessionService>,
    pub session_config: SessionConfig,
}

/// Handler for `POST /api/v1/verify`
///
/// Redeems a verification code previously issued over chat. On success
/// the verified user is recorded, a session cookie is set, and the
/// response carries a redirect target for the client.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": "123456789",
///     "code": "1234"
/// }
/// ```
///
/// # Responses
/// - 200: redemption succeeded, session cookie set
/// - 400: malformed input (missing fields, wrong code shape)
/// - 401: invalid or expired code (indistinguishable on purpose)
/// - 500: downstream write failure (the code is still consumed)
pub async fn verify<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<VerifyRequest>,
) -> HttpResponse
where
    R: Redeemer + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "invalid_request",
            "Enter your user ID and the 4-digit code",
        ));
    }

    let redeem_request = RedeemRequest {
        requester_id: request.user_id.clone(),
        code: request.code.clone(),
    };

    let redeemed = match state.redeemer.redeem(redeem_request).await {
        Ok(redeemed) => redeemed,
        Err(error) => return domain_error_response(error),
    };

    let token = match state.sessions.issue_session(&redeemed.requester_id) {
        Ok(token) => token,
        Err(error) => return domain_error_response(error),
    };

    tracing::info!(
        requester_id = %redeemed.requester_id,
        event = "session_established",
        "Redemption succeeded, session cookie set"
    );

    HttpResponse::Ok()
        .cookie(session_cookie(&state.session_config, token))
        .json(VerifyResponse {
            success: true,
            message: "Verification successful".to_string(),
            redirect: Some("/dashboard".to_string()),
        })
}

/// Build the session cookie carrying the signed token
fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), token)
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::hours(config.ttl_hours))
        .finish()
}
