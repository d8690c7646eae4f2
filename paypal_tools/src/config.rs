use log::*;
use ssg_common::{parse_boolean_flag, Secret};

const DEFAULT_API_BASE: &str = "https://api-m.sandbox.paypal.com";
const DEFAULT_BRAND_NAME: &str = "Online Store";

#[derive(Debug, Clone)]
pub struct PayPalConfig {
    pub api_base: String,
    pub client_id: String,
    pub client_secret: Secret<String>,
    /// Shown on the provider's hosted approval page.
    pub brand_name: String,
    /// When true, the payer name/email and shipping address from the checkout submission are attached to the
    /// order-creation payload. Off by default, which matches the behaviour of the system this one replaces
    /// (it accepted the details but never forwarded them).
    pub attach_payer_details: bool,
}

impl Default for PayPalConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            client_id: String::default(),
            client_secret: Secret::default(),
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            attach_payer_details: false,
        }
    }
}

impl PayPalConfig {
    pub fn new_from_env_or_default() -> Self {
        let api_base = std::env::var("SSG_PAYPAL_API_BASE").unwrap_or_else(|_| {
            info!("SSG_PAYPAL_API_BASE not set, using the sandbox environment");
            DEFAULT_API_BASE.to_string()
        });
        let client_id = std::env::var("SSG_PAYPAL_CLIENT_ID").unwrap_or_else(|_| {
            warn!("SSG_PAYPAL_CLIENT_ID not set. Wallet order requests will be rejected by the provider.");
            String::default()
        });
        let client_secret = Secret::new(std::env::var("SSG_PAYPAL_CLIENT_SECRET").unwrap_or_else(|_| {
            warn!("SSG_PAYPAL_CLIENT_SECRET not set. Wallet order requests will be rejected by the provider.");
            String::default()
        }));
        let brand_name =
            std::env::var("SSG_PAYPAL_BRAND_NAME").unwrap_or_else(|_| DEFAULT_BRAND_NAME.to_string());
        let attach_payer_details =
            parse_boolean_flag(std::env::var("SSG_PAYPAL_ATTACH_PAYER_DETAILS").ok(), false);
        Self { api_base, client_id, client_secret, brand_name, attach_payer_details }
    }
}
