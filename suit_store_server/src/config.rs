use std::env;

use log::*;
use paypal_tools::PayPalConfig;
use stripe_tools::StripeConfig;

const DEFAULT_SSG_HOST: &str = "127.0.0.1";
const DEFAULT_SSG_PORT: u16 = 8081;
const DEFAULT_STOREFRONT_BASE_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Base URL of the storefront. Product image links handed to the card provider are made absolute against
    /// this, and the fixed `/success` and `/cancel` redirect targets live under it.
    pub storefront_base_url: String,
    /// Card provider configuration.
    pub stripe_config: StripeConfig,
    /// Wallet provider configuration.
    pub paypal_config: PayPalConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SSG_HOST.to_string(),
            port: DEFAULT_SSG_PORT,
            database_url: String::default(),
            storefront_base_url: DEFAULT_STOREFRONT_BASE_URL.to_string(),
            stripe_config: StripeConfig::default(),
            paypal_config: PayPalConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("SSG_HOST").ok().unwrap_or_else(|| DEFAULT_SSG_HOST.into());
        let port = env::var("SSG_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for SSG_PORT. {e} Using the default, {DEFAULT_SSG_PORT}, instead."
                    );
                    DEFAULT_SSG_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_SSG_PORT);
        let database_url = env::var("SSG_DATABASE_URL").ok().unwrap_or_else(|| {
            error!("🪛️ SSG_DATABASE_URL is not set. Please set it to the URL for the gateway database.");
            String::default()
        });
        let storefront_base_url = env::var("SSG_STOREFRONT_BASE_URL").ok().unwrap_or_else(|| {
            info!("🪛️ SSG_STOREFRONT_BASE_URL is not set. Using the default, {DEFAULT_STOREFRONT_BASE_URL}.");
            DEFAULT_STOREFRONT_BASE_URL.to_string()
        });
        let stripe_config = StripeConfig::new_from_env_or_default();
        let paypal_config = PayPalConfig::new_from_env_or_default();
        Self { host, port, database_url, storefront_base_url, stripe_config, paypal_config }
    }
}

//-------------------------------------------  StorefrontUrls  --------------------------------------------------------
/// The subset of the configuration that route handlers need to build image and redirect links. Kept small and
/// free of secrets so it can be shared as application data.
#[derive(Clone, Debug)]
pub struct StorefrontUrls {
    base_url: String,
}

impl StorefrontUrls {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn image_base(&self) -> &str {
        &self.base_url
    }

    pub fn success_url(&self) -> String {
        format!("{}/success", self.base_url)
    }

    pub fn cancel_url(&self) -> String {
        format!("{}/cancel", self.base_url)
    }

    pub fn card_redirects(&self) -> stripe_tools::RedirectUrls {
        stripe_tools::RedirectUrls { success_url: self.success_url(), cancel_url: self.cancel_url() }
    }

    pub fn wallet_redirects(&self) -> paypal_tools::RedirectUrls {
        paypal_tools::RedirectUrls { return_url: self.success_url(), cancel_url: self.cancel_url() }
    }
}
