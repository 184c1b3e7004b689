//! Gateway abstraction.
//!
//! The API layer only ever talks to `dyn PaymentGateway`, so tests can swap
//! the Razorpay client for an in-process fake.

use realty_db::models::transaction::Notes;
use serde::{Deserialize, Serialize};

/// Default Razorpay API host.
pub const DEFAULT_BASE_URL: &str = "https://api.razorpay.com";

/// Credentials and endpoint for the payment gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub key_id: String,
    pub key_secret: String,
    pub base_url: String,
}

impl GatewayConfig {
    /// Read gateway settings from the environment.
    ///
    /// | Env var               | Default                    |
    /// |-----------------------|----------------------------|
    /// | `RAZORPAY_KEY_ID`     | required                   |
    /// | `RAZORPAY_KEY_SECRET` | required                   |
    /// | `RAZORPAY_BASE_URL`   | `https://api.razorpay.com` |
    ///
    /// Returns `None` when either key is missing or empty, which disables
    /// the payment endpoints.
    pub fn from_env() -> Option<Self> {
        let key_id = non_empty_var("RAZORPAY_KEY_ID")?;
        let key_secret = non_empty_var("RAZORPAY_KEY_SECRET")?;
        let base_url = non_empty_var("RAZORPAY_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Some(Self {
            key_id,
            key_secret,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Body sent to the gateway's order endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Amount in minor currency units (paise for INR).
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Notes>,
}

/// Order object returned by the gateway.
///
/// Only the fields the bridge needs are typed; everything else the gateway
/// sends is kept in `extra` and echoed back to the client unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Errors from the gateway layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    #[error("Gateway API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// A payment gateway capable of creating orders and checking checkout
/// signatures.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order on the gateway. Exactly one outbound call, no retry.
    async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, GatewayError>;

    /// Check the signature the checkout widget returned for a payment.
    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;
}
