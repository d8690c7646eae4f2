use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::Utc;
use serde_json::Value;
use suit_store_engine::{
    db_types::{NewOrderItem, OrderItem},
    traits::OrderApiError,
    OrderApi,
};

use super::helpers::post_request;
use crate::{endpoint_tests::mocks::MockOrderManager, routes::CompleteOrderRoute};

fn cart_item(name: &str, quantity: i64, price: f64) -> NewOrderItem {
    NewOrderItem {
        product_id: 1,
        product_name: name.to_string(),
        product_quantity: quantity,
        product_color: Some("navy".to_string()),
        price,
        total_price: price * quantity as f64,
        customer_email: "alice@example.com".to_string(),
        shipping_city: "Cape Town".to_string(),
        shipping_country: "South Africa".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
        shipping_address: "1 Long Street".to_string(),
        postal_code: "8001".to_string(),
        phone_number: "+27 21 555 0100".to_string(),
        payment_method: "card".to_string(),
        billing_address: "1 Long Street".to_string(),
    }
}

fn configure(cfg: &mut ServiceConfig) {
    let mut orders = MockOrderManager::new();
    orders.expect_insert_order_items().returning(|group_id, items| {
        let rows = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| OrderItem {
                id: i as i64 + 1,
                order_group_id: group_id.clone(),
                product_id: item.product_id,
                product_name: item.product_name,
                product_quantity: item.product_quantity,
                product_color: item.product_color,
                price: item.price,
                total_price: item.total_price,
                customer_email: item.customer_email,
                shipping_city: item.shipping_city,
                shipping_country: item.shipping_country,
                first_name: item.first_name,
                last_name: item.last_name,
                shipping_address: item.shipping_address,
                postal_code: item.postal_code,
                phone_number: item.phone_number,
                payment_method: item.payment_method,
                billing_address: item.billing_address,
                created_at: Utc::now(),
            })
            .collect();
        Ok(rows)
    });
    let api = OrderApi::new(orders);
    cfg.service(CompleteOrderRoute::<MockOrderManager>::new()).app_data(web::Data::new(api));
}

fn configure_failing_backend(cfg: &mut ServiceConfig) {
    let mut orders = MockOrderManager::new();
    orders
        .expect_insert_order_items()
        .returning(|_, _| Err(OrderApiError::DatabaseError("connection reset".to_string())));
    let api = OrderApi::new(orders);
    cfg.service(CompleteOrderRoute::<MockOrderManager>::new()).app_data(web::Data::new(api));
}

#[actix_web::test]
async fn complete_order_returns_the_group_id() {
    let _ = env_logger::try_init().ok();
    let items = vec![cart_item("Navy Two Piece", 1, 199.99), cart_item("Silk Tie", 2, 19.99)];
    let (status, body) = post_request("/completeOrder", &items, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert_eq!(response["Status"], "Success");
    let order_id = response["orderId"].as_str().expect("orderId missing from response");
    assert_eq!(order_id.len(), 32);
}

#[actix_web::test]
async fn empty_cart_is_a_bad_request() {
    let _ = env_logger::try_init().ok();
    let items: Vec<NewOrderItem> = vec![];
    let (status, body) = post_request("/completeOrder", &items, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert_eq!(err["error"], "Could not read request body: An order must contain at least one item");
}

#[actix_web::test]
async fn backend_failure_maps_to_internal_error() {
    let _ = env_logger::try_init().ok();
    let items = vec![cart_item("Navy Two Piece", 1, 199.99)];
    let (status, body) =
        post_request("/completeOrder", &items, configure_failing_backend).await.expect("Request failed");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let err: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert!(err["error"].as_str().unwrap_or_default().contains("Database error"));
}
