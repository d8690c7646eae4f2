use log::*;
use ssg_common::Secret;

const DEFAULT_API_BASE: &str = "https://api.stripe.com";

#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub api_base: String,
    pub secret_key: Secret<String>,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_string(), secret_key: Secret::default() }
    }
}

impl StripeConfig {
    pub fn new_from_env_or_default() -> Self {
        let api_base = std::env::var("SSG_STRIPE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let secret_key = Secret::new(std::env::var("SSG_STRIPE_SECRET_KEY").unwrap_or_else(|_| {
            warn!("SSG_STRIPE_SECRET_KEY not set. Checkout session requests will be rejected by the provider.");
            String::default()
        }));
        Self { api_base, secret_key }
    }
}
