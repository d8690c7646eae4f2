use std::sync::Arc;

use log::*;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use ssg_common::USD_CURRENCY_CODE;

use crate::{
    config::PayPalConfig,
    data_objects::{PayPalOrder, RedirectUrls, UserDetails},
    PayPalApiError,
};

#[derive(Clone)]
pub struct PayPalApi {
    config: PayPalConfig,
    client: Arc<Client>,
}

impl PayPalApi {
    pub fn new(config: PayPalConfig) -> Result<Self, PayPalApiError> {
        let client = Client::builder().build().map_err(|e| PayPalApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base.trim_end_matches('/'))
    }

    /// Exchanges the configured client credentials for a bearer token. Tokens are not cached; every order
    /// creation performs its own exchange.
    async fn fetch_access_token(&self) -> Result<String, PayPalApiError> {
        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
        }
        trace!("Requesting wallet provider access token");
        let response = self
            .client
            .post(self.url("/v1/oauth2/token"))
            .basic_auth(&self.config.client_id, Some(self.config.client_secret.reveal()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| PayPalApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            let token = response.json::<TokenResponse>().await.map_err(|e| PayPalApiError::JsonError(e.to_string()))?;
            Ok(token.access_token)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| PayPalApiError::RestResponseError(e.to_string()))?;
            Err(PayPalApiError::QueryError { status, message })
        }
    }

    /// Creates an order with intent `CAPTURE` (capture at approval, not authorize-then-capture) for the given
    /// aggregate amount. Use [`PayPalOrder::approval_url`] on the result to obtain the shopper redirect.
    pub async fn create_order(
        &self,
        total_value: &str,
        user_details: Option<&UserDetails>,
        urls: &RedirectUrls,
    ) -> Result<PayPalOrder, PayPalApiError> {
        let token = self.fetch_access_token().await?;
        let body = order_body(&self.config, total_value, user_details, urls);
        debug!("Creating wallet order for {} {total_value}", USD_CURRENCY_CODE);
        let response = self
            .client
            .post(self.url("/v2/checkout/orders"))
            .bearer_auth(token)
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await
            .map_err(|e| PayPalApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            let order = response.json::<PayPalOrder>().await.map_err(|e| PayPalApiError::JsonError(e.to_string()))?;
            info!("Created wallet order {} ({})", order.id, order.status);
            Ok(order)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| PayPalApiError::RestResponseError(e.to_string()))?;
            Err(PayPalApiError::QueryError { status, message })
        }
    }
}

fn order_body(
    config: &PayPalConfig,
    total_value: &str,
    user_details: Option<&UserDetails>,
    urls: &RedirectUrls,
) -> Value {
    let mut body = json!({
        "intent": "CAPTURE",
        "purchase_units": [
            {
                "description": format!("Order from {}", config.brand_name),
                "amount": {
                    "currency_code": USD_CURRENCY_CODE,
                    "value": total_value,
                },
            },
        ],
        "application_context": {
            "brand_name": config.brand_name,
            "landing_page": "BILLING",
            "user_action": "PAY_NOW",
            "return_url": urls.return_url,
            "cancel_url": urls.cancel_url,
        },
    });
    if config.attach_payer_details {
        if let Some(details) = user_details {
            body["payer"] = payer_block(details);
            if let Some(shipping) = shipping_block(details) {
                body["purchase_units"][0]["shipping"] = shipping;
            }
        }
    }
    body
}

fn payer_block(details: &UserDetails) -> Value {
    let mut payer = json!({});
    if let Some(email) = &details.email {
        payer["email_address"] = json!(email);
    }
    if details.first_name.is_some() || details.last_name.is_some() {
        payer["name"] = json!({
            "given_name": details.first_name.clone().unwrap_or_default(),
            "surname": details.last_name.clone().unwrap_or_default(),
        });
    }
    payer
}

fn shipping_block(details: &UserDetails) -> Option<Value> {
    details.shipping_address.as_ref()?;
    Some(json!({
        "address": {
            "address_line_1": details.shipping_address.clone().unwrap_or_default(),
            "admin_area_2": details.shipping_city.clone().unwrap_or_default(),
            "postal_code": details.postal_code.clone().unwrap_or_default(),
            "country_code": details.shipping_country.clone().unwrap_or_default(),
        },
    }))
}
