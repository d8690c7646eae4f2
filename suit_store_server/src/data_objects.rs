use paypal_tools::UserDetails;
use serde::{Deserialize, Serialize};
use stripe_tools::CheckoutProduct;
use suit_store_engine::db_types::{NewOrderItem, OrderGroupId, UserProfile};

#[derive(Debug, Clone, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// The storefront's response contracts use capitalised / camelCase keys; the serde renames pin those down.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

impl RegisterResponse {
    pub fn success(user_id: i64) -> Self {
        Self { status: "Success".to_string(), user_id }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "Status")]
    pub status: String,
    pub user: UserProfile,
}

impl LoginResponse {
    pub fn success(user: UserProfile) -> Self {
        Self { status: "Success".to_string(), user }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCompletedResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "orderId")]
    pub order_id: OrderGroupId,
}

impl OrderCompletedResponse {
    pub fn success(order_id: OrderGroupId) -> Self {
        Self { status: "Success".to_string(), order_id }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSessionRequest {
    pub products: Vec<CheckoutProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSessionResponse {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayPalOrderRequest {
    #[serde(rename = "cartItems")]
    pub cart_items: Vec<NewOrderItem>,
    #[serde(rename = "userDetails", default)]
    pub user_details: Option<UserDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPalOrderResponse {
    #[serde(rename = "approvalUrl")]
    pub approval_url: String,
}
