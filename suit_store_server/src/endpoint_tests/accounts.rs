use actix_web::{http::StatusCode, web, web::ServiceConfig};
use serde_json::{json, Value};
use suit_store_engine::{
    db_types::LoginRecord,
    helpers::hash_password,
    traits::UserApiError,
    AccountApi,
};

use super::helpers::post_request;
use crate::{
    data_objects::{LoginRequest, RegisterRequest},
    endpoint_tests::mocks::MockUserManager,
    routes::{logout, LoginRoute, RegisterRoute},
};

fn alice() -> LoginRecord {
    LoginRecord {
        id: 42,
        name: "Alice Smith".to_string(),
        email: "alice@example.com".to_string(),
        password: hash_password("correct horse").expect("hashing failed"),
        avatar: None,
    }
}

fn configure(cfg: &mut ServiceConfig) {
    let mut users = MockUserManager::new();
    users.expect_create_user().returning(|user| {
        if user.email == "alice@example.com" {
            Err(UserApiError::EmailTaken(user.email))
        } else {
            Ok(43)
        }
    });
    users.expect_fetch_user_by_email().returning(|email| {
        if email == "alice@example.com" {
            Ok(Some(alice()))
        } else {
            Ok(None)
        }
    });
    let api = AccountApi::new(users);
    cfg.service(RegisterRoute::<MockUserManager>::new())
        .service(LoginRoute::<MockUserManager>::new())
        .service(logout)
        .app_data(web::Data::new(api));
}

#[actix_web::test]
async fn register_new_user() {
    let _ = env_logger::try_init().ok();
    let req = RegisterRequest {
        name: "Bob Jones".to_string(),
        password: "hunter2".to_string(),
        email: "bob@example.com".to_string(),
    };
    let (status, body) = post_request("/register", &req, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert_eq!(response, json!({"Status": "Success", "userId": 43}));
}

#[actix_web::test]
async fn register_duplicate_email_conflicts() {
    let _ = env_logger::try_init().ok();
    let req = RegisterRequest {
        name: "Evil Twin".to_string(),
        password: "other password".to_string(),
        email: "alice@example.com".to_string(),
    };
    let (status, body) = post_request("/register", &req, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::CONFLICT);
    let err: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert_eq!(err["error"], "User already exists");
}

#[actix_web::test]
async fn login_round_trip_returns_sanitized_profile() {
    let _ = env_logger::try_init().ok();
    let req = LoginRequest { email: "alice@example.com".to_string(), password: "correct horse".to_string() };
    let (status, body) = post_request("/login", &req, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert_eq!(
        response,
        json!({
            "Status": "Success",
            "user": {"name": "Alice Smith", "email": "alice@example.com", "avatar": "/default-avatar.png"}
        })
    );
    // The password hash must never appear anywhere in the response
    assert!(!body.contains("argon2"));
}

#[actix_web::test]
async fn login_with_wrong_password_is_unauthorized() {
    let _ = env_logger::try_init().ok();
    let req = LoginRequest { email: "alice@example.com".to_string(), password: "wrong horse".to_string() };
    let (status, body) = post_request("/login", &req, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let err: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert_eq!(err["error"], "Email and password do not match");
}

#[actix_web::test]
async fn login_with_unknown_email_is_not_found() {
    let _ = env_logger::try_init().ok();
    let req = LoginRequest { email: "nobody@example.com".to_string(), password: "correct horse".to_string() };
    let (status, body) = post_request("/login", &req, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::NOT_FOUND);
    let err: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert_eq!(err["error"], "The data was not found. Email not found");
}

#[actix_web::test]
async fn logout_acknowledges_without_any_backend() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/logout", &json!(null), configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert_eq!(response, json!({"message": "Logout successful"}));
}
