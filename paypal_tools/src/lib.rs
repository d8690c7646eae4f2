//! A minimal client for the digital-wallet payment provider's Orders REST API (no SDK dependency).
//!
//! The gateway's single flow: obtain a bearer token via the OAuth2 client-credentials grant, create an order with
//! intent `CAPTURE` and the cart's aggregate amount, then hand the `approve` link back to the storefront for the
//! shopper redirect. Credentials always come from configuration -- nothing is baked into the source.
mod api;
mod config;
mod error;
mod helpers;

mod data_objects;

pub use api::PayPalApi;
pub use config::PayPalConfig;
pub use data_objects::{LinkDescription, PayPalOrder, RedirectUrls, UserDetails};
pub use error::PayPalApiError;
pub use helpers::order_total;
