use std::sync::Arc;

use log::*;
use reqwest::Client;
use ssg_common::USD_CURRENCY_CODE_LOWER;

use crate::{
    config::StripeConfig,
    data_objects::{CheckoutLineItem, CheckoutSession, RedirectUrls},
    StripeApiError,
};

#[derive(Clone)]
pub struct StripeApi {
    config: StripeConfig,
    client: Arc<Client>,
}

impl StripeApi {
    pub fn new(config: StripeConfig) -> Result<Self, StripeApiError> {
        let client = Client::builder().build().map_err(|e| StripeApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base.trim_end_matches('/'))
    }

    /// Creates a hosted Checkout Session for the given line items.
    ///
    /// Single currency ("usd"), single mode ("payment"), card payments only. There is no idempotency key, so
    /// resubmitting the same cart creates a new, distinct session.
    pub async fn create_checkout_session(
        &self,
        items: &[CheckoutLineItem],
        urls: &RedirectUrls,
    ) -> Result<CheckoutSession, StripeApiError> {
        let form = checkout_session_form(items, urls);
        trace!("Creating checkout session with {} line items", items.len());
        let response = self
            .client
            .post(self.url("/v1/checkout/sessions"))
            .basic_auth(self.config.secret_key.reveal(), None::<&str>)
            .form(&form)
            .send()
            .await
            .map_err(|e| StripeApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            let session =
                response.json::<CheckoutSession>().await.map_err(|e| StripeApiError::JsonError(e.to_string()))?;
            info!("Created checkout session {}", session.id);
            Ok(session)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| StripeApiError::RestResponseError(e.to_string()))?;
            Err(StripeApiError::QueryError { status, message })
        }
    }
}

/// The provider takes form-encoded bodies with indexed bracket keys rather than JSON.
fn checkout_session_form(items: &[CheckoutLineItem], urls: &RedirectUrls) -> Vec<(String, String)> {
    let mut form = vec![
        ("mode".to_string(), "payment".to_string()),
        ("payment_method_types[0]".to_string(), "card".to_string()),
        ("success_url".to_string(), urls.success_url.clone()),
        ("cancel_url".to_string(), urls.cancel_url.clone()),
    ];
    for (i, item) in items.iter().enumerate() {
        form.push((format!("line_items[{i}][price_data][currency]"), USD_CURRENCY_CODE_LOWER.to_string()));
        form.push((format!("line_items[{i}][price_data][product_data][name]"), item.name.clone()));
        form.push((format!("line_items[{i}][price_data][product_data][images][0]"), item.image_url.clone()));
        form.push((format!("line_items[{i}][price_data][unit_amount]"), item.unit_amount.value().to_string()));
        form.push((format!("line_items[{i}][quantity]"), item.quantity.to_string()));
    }
    form
}
