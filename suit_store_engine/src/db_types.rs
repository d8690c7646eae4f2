use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Avatar reference returned for users that never uploaded one.
pub const DEFAULT_AVATAR: &str = "/default-avatar.png";

//--------------------------------------     Product       -----------------------------------------------------------
/// A row in the product catalog. Products are read-only from the gateway's perspective; some other system maintains
/// the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Price in major units (dollars), as stored. Conversion to minor units happens at the payment boundary.
    pub price: f64,
    pub img: String,
}

//--------------------------------------     Login records       -----------------------------------------------------
/// A row in the `login` table. Holds the password *hash*; this type is deliberately not serializable so the hash
/// can never leak into a response body.
#[derive(Debug, Clone, FromRow)]
pub struct LoginRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
}

/// A new user, ready for insertion. `password_hash` must already be hashed; raw passwords never reach the
/// database layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// The sanitized view of a user that login returns to clients. Never contains the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl From<LoginRecord> for UserProfile {
    fn from(user: LoginRecord) -> Self {
        Self {
            name: user.name,
            email: user.email,
            avatar: user.avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
        }
    }
}

//--------------------------------------     Orders       ------------------------------------------------------------
/// Identifies all order rows that were persisted from a single checkout submission. The source system had no such
/// linkage; the gateway stamps one on every row so a paid cart corresponds to exactly one group.
#[derive(Clone, Debug, Type, PartialEq, Eq, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct OrderGroupId(String);

impl OrderGroupId {
    pub fn random() -> Self {
        Self(format!("{:032x}", rand::random::<u128>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S: Into<String>> From<S> for OrderGroupId {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

/// One cart line item as submitted by the client at checkout, including the shipping/billing bundle that is
/// denormalized onto every row. Values are trusted as supplied; there is no cross-check against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub product_name: String,
    pub product_quantity: i64,
    #[serde(default)]
    pub product_color: Option<String>,
    pub price: f64,
    pub total_price: f64,
    pub customer_email: String,
    pub shipping_city: String,
    pub shipping_country: String,
    pub first_name: String,
    pub last_name: String,
    pub shipping_address: String,
    pub postal_code: String,
    pub phone_number: String,
    pub payment_method: String,
    pub billing_address: String,
}

/// A persisted order row. Append-only; there is no update or cancellation path.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub order_group_id: OrderGroupId,
    pub product_id: i64,
    pub product_name: String,
    pub product_quantity: i64,
    pub product_color: Option<String>,
    pub price: f64,
    pub total_price: f64,
    pub customer_email: String,
    pub shipping_city: String,
    pub shipping_country: String,
    pub first_name: String,
    pub last_name: String,
    pub shipping_address: String,
    pub postal_code: String,
    pub phone_number: String,
    pub payment_method: String,
    pub billing_address: String,
    pub created_at: DateTime<Utc>,
}
