//! End-to-end handler tests over in-memory stores
//!
//! Exercises the full redemption flow the way a browser would see it:
//! issue over the bot-side issuer, redeem over HTTP, then use the
//! session cookie.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::{http::StatusCode, test, web};

use cg_api::app::create_app;
use cg_api::routes::AppState;
use cg_core::domain::entities::ProfileMetadata;
use cg_core::services::issuer::{Issuer, IssuerConfig, IssuerService};
use cg_core::services::redeemer::RedeemerService;
use cg_core::services::session::SessionService;
use cg_infra::profile::MemoryProfileStore;
use cg_infra::store::MemoryCodeStore;
use cg_shared::config::SessionConfig;

struct TestHarness {
    issuer: IssuerService<MemoryCodeStore>,
    profiles: Arc<MemoryProfileStore>,
    state: web::Data<AppState<RedeemerService<MemoryCodeStore, MemoryProfileStore>>>,
}

fn harness() -> TestHarness {
    let codes = Arc::new(MemoryCodeStore::new());
    let profiles = Arc::new(MemoryProfileStore::new());
    let session_config = SessionConfig {
        secret: "test-secret".to_string(),
        ..Default::default()
    };

    TestHarness {
        issuer: IssuerService::new(codes.clone(), IssuerConfig::with_ttl(60)),
        profiles: profiles.clone(),
        state: web::Data::new(AppState {
            redeemer: Arc::new(RedeemerService::new(codes, profiles)),
            sessions: Arc::new(SessionService::new(session_config.clone())),
            session_config,
        }),
    }
}

#[actix_rt::test]
async fn verify_redeems_code_and_sets_session_cookie() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let issued = harness
        .issuer
        .issue("42", ProfileMetadata::named("Alice"))
        .await
        .unwrap();

    let request = test::TestRequest::post()
        .uri("/api/v1/verify")
        .set_json(serde_json::json!({ "user_id": "42", "code": issued.code }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .response()
        .cookies()
        .find(|c| c.name() == "cg_session")
        .expect("session cookie must be set");
    assert!(!cookie.value().is_empty());

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["redirect"], "/dashboard");

    // Profile recorded for the requester
    let profile = harness.profiles.get("42").await.unwrap();
    assert_eq!(profile.metadata.first_name.as_deref(), Some("Alice"));
}

#[actix_rt::test]
async fn second_redemption_fails_uniformly() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let issued = harness
        .issuer
        .issue("42", ProfileMetadata::default())
        .await
        .unwrap();
    let payload = serde_json::json!({ "user_id": "42", "code": issued.code });

    let first = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/verify")
            .set_json(payload.clone())
            .to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/verify")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(second).await;
    assert_eq!(body["error"], "invalid_code");
}

#[actix_rt::test]
async fn wrong_and_unknown_codes_are_indistinguishable() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let issued = harness
        .issuer
        .issue("42", ProfileMetadata::default())
        .await
        .unwrap();
    // A code that cannot match the issued one
    let wrong = if issued.code == "0000" { "0001" } else { "0000" };

    let wrong_code = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/verify")
            .set_json(serde_json::json!({ "user_id": "42", "code": wrong }))
            .to_request(),
    )
    .await;
    let unknown_user = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/verify")
            .set_json(serde_json::json!({ "user_id": "nobody", "code": "1234" }))
            .to_request(),
    )
    .await;

    assert_eq!(wrong_code.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let wrong_body: serde_json::Value = test::read_body_json(wrong_code).await;
    let unknown_body: serde_json::Value = test::read_body_json(unknown_user).await;
    assert_eq!(wrong_body["error"], unknown_body["error"]);
    assert_eq!(wrong_body["message"], unknown_body["message"]);
}

#[actix_rt::test]
async fn malformed_requests_are_rejected_with_400() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    for payload in [
        serde_json::json!({ "user_id": "42", "code": "12a4" }),
        serde_json::json!({ "user_id": "42", "code": "123" }),
        serde_json::json!({ "user_id": "", "code": "1234" }),
    ] {
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/verify")
                .set_json(payload)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    assert!(harness.profiles.is_empty().await);
}

#[actix_rt::test]
async fn session_endpoint_round_trip() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    // Unauthenticated at first
    let anonymous = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/session").to_request(),
    )
    .await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    // Redeem to obtain a session cookie
    let issued = harness
        .issuer
        .issue("42", ProfileMetadata::default())
        .await
        .unwrap();
    let verify = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/verify")
            .set_json(serde_json::json!({ "user_id": "42", "code": issued.code }))
            .to_request(),
    )
    .await;
    let token = verify
        .response()
        .cookies()
        .find(|c| c.name() == "cg_session")
        .unwrap()
        .value()
        .to_string();

    let authenticated = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/session")
            .cookie(Cookie::new("cg_session", token))
            .to_request(),
    )
    .await;
    assert_eq!(authenticated.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(authenticated).await;
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user_id"], "42");

    // A tampered cookie is unauthenticated, not an error
    let tampered = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/session")
            .cookie(Cookie::new("cg_session", "garbage"))
            .to_request(),
    )
    .await;
    assert_eq!(tampered.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn health_endpoint_reports_healthy() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/health").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["status"], "healthy");
}
