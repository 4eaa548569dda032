use actix_web::{test, test::TestRequest, App};
use cognito_tools::{CognitoApiError, UserAttribute, VerifiedUser};
use sales_report_engine::{db_types::UserAttributeKind, traits::UserApiError};

use super::{
    helpers::{configure_gated, send, test_user},
    mocks::{MockIdentityProvider, MockUserDirectory},
};

fn verified_alice() -> VerifiedUser {
    VerifiedUser {
        username: "alice".to_string(),
        user_attributes: vec![
            UserAttribute::new("sub", "1234-5678"),
            UserAttribute::new("email", "alice@example.com"),
            UserAttribute::new("name", "Alice"),
        ],
    }
}

#[actix_web::test]
async fn requests_without_a_token_are_rejected_before_the_verifier_is_called() {
    let _ = env_logger::try_init().ok();
    let mut verifier = MockIdentityProvider::new();
    verifier.expect_verify_access_token().never();
    let directory = MockUserDirectory::new();
    let app = test::init_service(App::new().configure(configure_gated(verifier, directory))).await;

    let req = TestRequest::get().uri("/api/whoami").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 401);
    assert_eq!(body, r#"{"message":"Unauthorized"}"#);
}

#[actix_web::test]
async fn malformed_authorization_headers_count_as_no_token() {
    let mut verifier = MockIdentityProvider::new();
    verifier.expect_verify_access_token().never();
    let directory = MockUserDirectory::new();
    let app = test::init_service(App::new().configure(configure_gated(verifier, directory))).await;

    // Wrong scheme
    let req = TestRequest::get().uri("/api/whoami").insert_header(("Authorization", "Token abc123")).to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 401);
    assert_eq!(body, r#"{"message":"Unauthorized"}"#);

    // Bearer scheme but no token
    let req = TestRequest::get().uri("/api/whoami").insert_header(("Authorization", "Bearer ")).to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 401);
    assert_eq!(body, r#"{"message":"Unauthorized"}"#);
}

#[actix_web::test]
async fn exempt_routes_pass_through_without_touching_the_verifier() {
    let mut verifier = MockIdentityProvider::new();
    verifier.expect_verify_access_token().never();
    let directory = MockUserDirectory::new();
    let app = test::init_service(App::new().configure(configure_gated(verifier, directory))).await;

    for path in ["/api/auth/signup", "/api/auth/confirm-signup", "/api/auth/login"] {
        let req = TestRequest::post().uri(path).to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status.as_u16(), 200, "{path} should be exempt");
        assert_eq!(body, "ok");
    }
}

#[actix_web::test]
async fn exemption_matching_is_exact() {
    let mut verifier = MockIdentityProvider::new();
    verifier.expect_verify_access_token().never();
    let directory = MockUserDirectory::new();
    let app = test::init_service(App::new().configure(configure_gated(verifier, directory))).await;

    // Near misses of the exempt paths are still gated
    for path in ["/api/auth/login/", "/api/auth/login-now", "/api/v2/auth/login"] {
        let req = TestRequest::post().uri(path).to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status.as_u16(), 401, "{path} should be gated");
        assert_eq!(body, r#"{"message":"Unauthorized"}"#);
    }
}

#[actix_web::test]
async fn failed_verification_is_unauthorized() {
    let mut verifier = MockIdentityProvider::new();
    verifier.expect_verify_access_token().withf(|t| t == "expiredtoken").returning(|_| {
        Err(CognitoApiError::ServiceError {
            code: "NotAuthorizedException".to_string(),
            message: "Access Token has expired".to_string(),
        })
    });
    let mut directory = MockUserDirectory::new();
    directory.expect_fetch_first_user_by_attribute().never();
    let app = test::init_service(App::new().configure(configure_gated(verifier, directory))).await;

    let req =
        TestRequest::get().uri("/api/whoami").insert_header(("Authorization", "Bearer expiredtoken")).to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 401);
    assert_eq!(body, r#"{"message":"Unauthorized"}"#);
}

#[actix_web::test]
async fn verified_users_without_a_local_account_are_rejected() {
    let mut verifier = MockIdentityProvider::new();
    verifier.expect_verify_access_token().returning(|_| Ok(verified_alice()));
    let mut directory = MockUserDirectory::new();
    directory.expect_fetch_first_user_by_attribute().returning(|_, _| Ok(None));
    let app = test::init_service(App::new().configure(configure_gated(verifier, directory))).await;

    let req = TestRequest::get().uri("/api/whoami").insert_header(("Authorization", "Bearer goodtoken")).to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 401);
    assert_eq!(body, r#"{"message":"User not found"}"#);
}

#[actix_web::test]
async fn verified_token_without_an_email_attribute_is_rejected() {
    let mut verifier = MockIdentityProvider::new();
    verifier.expect_verify_access_token().returning(|_| {
        Ok(VerifiedUser { username: "alice".to_string(), user_attributes: vec![UserAttribute::new("name", "Alice")] })
    });
    let mut directory = MockUserDirectory::new();
    directory.expect_fetch_first_user_by_attribute().never();
    let app = test::init_service(App::new().configure(configure_gated(verifier, directory))).await;

    let req = TestRequest::get().uri("/api/whoami").insert_header(("Authorization", "Bearer goodtoken")).to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 401);
    assert_eq!(body, r#"{"message":"User not found"}"#);
}

#[actix_web::test]
async fn a_directory_failure_is_a_server_error_not_a_rejection() {
    let mut verifier = MockIdentityProvider::new();
    verifier.expect_verify_access_token().returning(|_| Ok(verified_alice()));
    let mut directory = MockUserDirectory::new();
    directory
        .expect_fetch_first_user_by_attribute()
        .returning(|_, _| Err(UserApiError::DatabaseError("connection reset".to_string())));
    let app = test::init_service(App::new().configure(configure_gated(verifier, directory))).await;

    let req = TestRequest::get().uri("/api/whoami").insert_header(("Authorization", "Bearer goodtoken")).to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 500);
    assert!(body.contains("error"), "was: {body}");
}

#[actix_web::test]
async fn the_attached_identity_carries_the_claims_and_the_directory_id() {
    let mut verifier = MockIdentityProvider::new();
    verifier.expect_verify_access_token().withf(|t| t == "goodtoken").returning(|_| Ok(verified_alice()));
    let mut directory = MockUserDirectory::new();
    directory
        .expect_fetch_first_user_by_attribute()
        .withf(|k, v| *k == UserAttributeKind::Email && v == "alice@example.com")
        .returning(|_, _| Ok(Some(test_user())));
    let app = test::init_service(App::new().configure(configure_gated(verifier, directory))).await;

    let req = TestRequest::get().uri("/api/whoami").insert_header(("Authorization", "Bearer goodtoken")).to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 200);
    let identity: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(identity["token"], "goodtoken");
    assert_eq!(identity["email"], "alice@example.com");
    assert_eq!(identity["name"], "Alice");
    assert_eq!(identity["id"], "u1");
}

#[actix_web::test]
async fn repeating_a_verified_request_yields_the_same_allow_decision() {
    let mut verifier = MockIdentityProvider::new();
    verifier.expect_verify_access_token().withf(|t| t == "goodtoken").times(2).returning(|_| Ok(verified_alice()));
    let mut directory = MockUserDirectory::new();
    directory
        .expect_fetch_first_user_by_attribute()
        .withf(|k, v| *k == UserAttributeKind::Email && v == "alice@example.com")
        .times(2)
        .returning(|_, _| Ok(Some(test_user())));
    let app = test::init_service(App::new().configure(configure_gated(verifier, directory))).await;

    let mut bodies = Vec::with_capacity(2);
    for _ in 0..2 {
        let req = TestRequest::get().uri("/api/whoami").insert_header(("Authorization", "Bearer goodtoken")).to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status.as_u16(), 200);
        bodies.push(body);
    }
    assert_eq!(bodies[0], bodies[1]);
}
