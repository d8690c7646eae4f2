use serde::{Deserialize, Serialize};

use crate::PayPalApiError;

/// Shipping/contact details the storefront collects at checkout. The provider request only uses these when
/// [`crate::PayPalConfig::attach_payer_details`] is enabled; otherwise they are accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub shipping_city: Option<String>,
    #[serde(default)]
    pub shipping_country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Where the provider's approval page sends the shopper afterwards.
#[derive(Debug, Clone)]
pub struct RedirectUrls {
    pub return_url: String,
    pub cancel_url: String,
}

/// One entry of the HATEOAS link set the provider returns on every order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDescription {
    pub href: String,
    pub rel: String,
    #[serde(default)]
    pub method: Option<String>,
}

/// The slice of the provider's order object the gateway cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPalOrder {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub links: Vec<LinkDescription>,
}

impl PayPalOrder {
    /// Returns the hyperlink the shopper must visit to approve the payment.
    ///
    /// A response without an `approve` link is an explicit error; the link set is provider-controlled and must
    /// never be assumed to contain it.
    pub fn approval_url(&self) -> Result<&str, PayPalApiError> {
        self.links
            .iter()
            .find(|link| link.rel == "approve")
            .map(|link| link.href.as_str())
            .ok_or(PayPalApiError::MissingApprovalLink)
    }
}
