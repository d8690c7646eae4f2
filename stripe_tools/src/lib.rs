//! A minimal client for the card payment provider's hosted-checkout REST API (no SDK dependency).
//!
//! The only operation the gateway needs is creating a Checkout Session: one line item per cart entry, amounts in
//! integer minor units, and fixed success/cancel redirect targets. The provider hosts the payment page; the
//! gateway only hands the returned session id back to the storefront.
mod api;
mod config;
mod error;

mod data_objects;

pub use api::StripeApi;
pub use config::StripeConfig;
pub use data_objects::{line_items_from_products, CheckoutLineItem, CheckoutProduct, CheckoutSession, RedirectUrls};
pub use error::StripeApiError;
