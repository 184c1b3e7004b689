//! Razorpay REST client.
//!
//! Only the two operations checkout needs: `POST /v1/orders` and local
//! signature verification with the key secret.

use std::time::Duration;

use crate::gateway::{GatewayConfig, GatewayError, GatewayOrder, OrderRequest, PaymentGateway};
use crate::signature;

/// Per-request timeout for gateway calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the Razorpay API, authenticated with a key pair.
pub struct RazorpayGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl RazorpayGateway {
    /// Build a client with a dedicated connection pool and request timeout.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    fn orders_url(&self) -> String {
        format!("{}/v1/orders", self.config.base_url)
    }

    // ---- private helpers ----

    /// Return the response unchanged on a 2xx status, or a
    /// [`GatewayError::Api`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, GatewayError> {
        tracing::debug!(
            amount = request.amount,
            currency = %request.currency,
            receipt = %request.receipt,
            "Creating gateway order",
        );

        let response = self
            .client
            .post(self.orders_url())
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        signature::verify_signature(&self.config.key_secret, order_id, payment_id, signature)
    }
}
