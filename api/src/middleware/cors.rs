//! CORS middleware configuration for cross-origin requests.
//!
//! The verification form may be served from a different origin than the
//! API, so browsers need CORS headers to submit codes and read session
//! state. Credentials support is required because the session rides in
//! a cookie.
//!
//! # Environment Variables
//! - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins; when
//!   unset, any origin is allowed (development mode)
//! - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance from the environment.
pub fn create_cors() -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
        ])
        .supports_credentials()
        .max_age(max_age);

    match env::var("ALLOWED_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            tracing::info!("Restricting CORS to configured origins");
            origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .fold(cors, |cors, origin| cors.allowed_origin(origin))
        }
        _ => {
            tracing::info!("No ALLOWED_ORIGINS set, allowing any origin");
            cors.allow_any_origin()
        }
    }
}
