//! Hosted-checkout provider client.
//!
//! Thin reqwest wrapper over the provider's REST API: create a hosted
//! checkout session, fetch it back for reconciliation. Payment state is the
//! provider's; this application only reads `payment_status` and copies it.

use serde::Deserialize;

use crate::server::error::AppError;

/// A checkout session as returned by the provider.
///
/// `url` is only present on freshly created sessions; retrieved sessions may
/// omit it once the customer has completed or abandoned the flow.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: Option<String>,
    pub status: Option<String>,
    pub payment_status: String,
}

/// Parameters for creating a hosted checkout session.
#[derive(Debug, Clone)]
pub struct CreateSessionParams {
    /// Application purchase id carried through as provider metadata.
    pub purchase_id: i32,
    /// Line item name shown on the provider's payment page.
    pub product_name: String,
    /// Price per seat in cents.
    pub unit_amount_cents: i64,
    /// Seat count.
    pub quantity: i32,
    /// Where the provider redirects after payment.
    pub success_url: String,
    /// Where the provider redirects on abandonment.
    pub cancel_url: String,
}

/// Client for the checkout provider's sessions API.
///
/// Cheap to clone: the inner reqwest client is reference-counted and the
/// credentials are plain strings.
#[derive(Clone)]
pub struct CheckoutClient {
    http_client: reqwest::Client,
    api_base: String,
    secret_key: String,
}

impl CheckoutClient {
    /// Creates a new client against `api_base` authenticating with `secret_key`.
    pub fn new(http_client: reqwest::Client, api_base: String, secret_key: String) -> Self {
        Self {
            http_client,
            api_base,
            secret_key,
        }
    }

    /// Creates a hosted checkout session for one line item.
    ///
    /// # Returns
    /// - `Ok(CheckoutSession)` - Session with redirect URL
    /// - `Err(AppError::ReqwestErr)` - Transport failure or non-2xx response
    pub async fn create_session(
        &self,
        params: CreateSessionParams,
    ) -> Result<CheckoutSession, AppError> {
        let form = [
            ("mode", "payment".to_string()),
            ("success_url", params.success_url),
            ("cancel_url", params.cancel_url),
            (
                "line_items[0][price_data][currency]",
                "usd".to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                params.product_name,
            ),
            (
                "line_items[0][price_data][unit_amount]",
                params.unit_amount_cents.to_string(),
            ),
            ("line_items[0][quantity]", params.quantity.to_string()),
            ("metadata[purchase_id]", params.purchase_id.to_string()),
        ];

        let session = self
            .http_client
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json::<CheckoutSession>()
            .await?;

        Ok(session)
    }

    /// Fetches a checkout session for status reconciliation.
    pub async fn get_session(&self, session_id: &str) -> Result<CheckoutSession, AppError> {
        let session = self
            .http_client
            .get(format!(
                "{}/v1/checkout/sessions/{}",
                self.api_base, session_id
            ))
            .bearer_auth(&self.secret_key)
            .send()
            .await?
            .error_for_status()?
            .json::<CheckoutSession>()
            .await?;

        Ok(session)
    }
}
