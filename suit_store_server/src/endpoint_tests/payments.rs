//! The provider clients are concrete types, so these tests point them at an unroutable local address and assert
//! that provider failures surface as a 500 with the gateway's JSON error shape. Payload construction itself is
//! unit-tested in the provider crates.
use actix_web::{http::StatusCode, web, web::ServiceConfig};
use paypal_tools::{PayPalApi, PayPalConfig};
use serde_json::{json, Value};
use ssg_common::Secret;
use stripe_tools::{StripeApi, StripeConfig};

use super::helpers::post_request;
use crate::{
    config::StorefrontUrls,
    routes::{create_checkout_session, create_paypal_order},
};

const UNROUTABLE_API_BASE: &str = "http://127.0.0.1:9";

fn configure(cfg: &mut ServiceConfig) {
    let stripe_config =
        StripeConfig { api_base: UNROUTABLE_API_BASE.to_string(), secret_key: Secret::new("sk_test_x".to_string()) };
    let stripe = StripeApi::new(stripe_config).expect("Error creating card client");
    let paypal_config = PayPalConfig {
        api_base: UNROUTABLE_API_BASE.to_string(),
        client_id: "client".to_string(),
        client_secret: Secret::new("secret".to_string()),
        ..PayPalConfig::default()
    };
    let paypal = PayPalApi::new(paypal_config).expect("Error creating wallet client");
    cfg.service(create_checkout_session)
        .service(create_paypal_order)
        .app_data(web::Data::new(stripe))
        .app_data(web::Data::new(paypal))
        .app_data(web::Data::new(StorefrontUrls::new("http://localhost:3000")));
}

#[actix_web::test]
async fn unreachable_card_provider_maps_to_internal_error() {
    let _ = env_logger::try_init().ok();
    let body = json!({"products": [{"name": "Suit", "img": "a.png", "price": 19.99, "quantity": 2}]});
    let (status, body) = post_request("/create-checkout-session", &body, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let err: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert!(err["error"].as_str().unwrap_or_default().starts_with("Payment provider error"));
}

#[actix_web::test]
async fn unreachable_wallet_provider_maps_to_internal_error() {
    let _ = env_logger::try_init().ok();
    let body = json!({
        "cartItems": [{
            "product_id": 1,
            "product_name": "Navy Two Piece",
            "product_quantity": 1,
            "price": 199.99,
            "total_price": 199.99,
            "customer_email": "alice@example.com",
            "shipping_city": "Cape Town",
            "shipping_country": "South Africa",
            "first_name": "Alice",
            "last_name": "Smith",
            "shipping_address": "1 Long Street",
            "postal_code": "8001",
            "phone_number": "+27 21 555 0100",
            "payment_method": "paypal",
            "billing_address": "1 Long Street"
        }],
        "userDetails": {"email": "alice@example.com"}
    });
    let (status, body) = post_request("/create-paypal-order", &body, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let err: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert!(err["error"].as_str().unwrap_or_default().starts_with("Payment provider error"));
}
