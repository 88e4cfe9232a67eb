//! Handlers for GET /api/v1/session and POST /api/v1/logout

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse};

use cg_core::services::redeemer::Redeemer;

use crate::dto::SessionStatusResponse;
use crate::routes::AppState;

/// Handler for `GET /api/v1/session`
///
/// Reports whether the caller holds a valid session, without mutating
/// any state. Absent, expired, and tampered cookies all yield the same
/// unauthenticated 401.
pub async fn session_status<R>(
    req: HttpRequest,
    state: web::Data<AppState<R>>,
) -> HttpResponse
where
    R: Redeemer + 'static,
{
    let claims = req
        .cookie(&state.session_config.cookie_name)
        .and_then(|cookie| state.sessions.verify_session(cookie.value()).ok());

    match claims {
        Some(claims) => HttpResponse::Ok().json(SessionStatusResponse {
            authenticated: true,
            user_id: Some(claims.sub),
        }),
        None => HttpResponse::Unauthorized().json(SessionStatusResponse {
            authenticated: false,
            user_id: None,
        }),
    }
}

/// Handler for `POST /api/v1/logout`
///
/// Clears the session cookie. The token itself simply ages out; there
/// is no server-side session state to revoke.
pub async fn logout<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: Redeemer + 'static,
{
    let removal = Cookie::build(state.session_config.cookie_name.clone(), "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::ZERO)
        .finish();

    HttpResponse::Ok()
        .cookie(removal)
        .json(serde_json::json!({ "success": true }))
}
