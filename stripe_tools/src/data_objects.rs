use serde::{Deserialize, Serialize};
use ssg_common::UsdCents;

use crate::StripeApiError;

/// One cart entry as the storefront submits it: dollars-and-cents price and a relative image path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutProduct {
    pub name: String,
    pub img: String,
    pub price: f64,
    pub quantity: i64,
}

/// Where the provider's hosted page sends the shopper afterwards.
#[derive(Debug, Clone)]
pub struct RedirectUrls {
    pub success_url: String,
    pub cancel_url: String,
}

/// A provider-ready line item: minor-unit amount and an absolute image URL.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutLineItem {
    pub name: String,
    pub image_url: String,
    pub unit_amount: UsdCents,
    pub quantity: i64,
}

impl CheckoutLineItem {
    /// Converts a submitted cart entry. The price is rounded to the nearest cent, and the image reference is made
    /// absolute against `image_base` since the provider fetches it from its own servers.
    pub fn from_product(product: &CheckoutProduct, image_base: &str) -> Result<Self, StripeApiError> {
        let unit_amount = UsdCents::try_from_dollars(product.price)
            .map_err(|e| StripeApiError::InvalidCurrencyAmount(e.to_string()))?;
        let image_url = format!("{}/{}", image_base.trim_end_matches('/'), product.img.trim_start_matches('/'));
        Ok(Self { name: product.name.clone(), image_url, unit_amount, quantity: product.quantity })
    }
}

pub fn line_items_from_products(
    products: &[CheckoutProduct],
    image_base: &str,
) -> Result<Vec<CheckoutLineItem>, StripeApiError> {
    products.iter().map(|p| CheckoutLineItem::from_product(p, image_base)).collect()
}

/// The slice of the provider's session object the gateway cares about. The id is what the storefront uses to
/// redirect the shopper to the hosted payment page.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}
