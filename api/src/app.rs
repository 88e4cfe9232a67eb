//! Application factory
//!
//! Builds the Actix application with all routes and middleware wired,
//! generic over the redeemer variant selected at startup.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use cg_core::services::redeemer::Redeemer;

use crate::middleware::cors::create_cors;
use crate::routes::session::{logout, session_status};
use crate::routes::verify::{verify, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: Redeemer + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .route("/verify", web::post().to(verify::<R>))
                .route("/session", web::get().to(session_status::<R>))
                .route("/logout", web::post().to(logout::<R>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "codegate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// JSON body for unmatched routes
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
