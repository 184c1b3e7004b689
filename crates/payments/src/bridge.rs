//! Payment Bridge: gateway calls paired with transaction bookkeeping.
//!
//! Order creation records a `created` transaction once the gateway accepts
//! the order. Verification moves it to `paid` or `failed`; a `paid`
//! transaction is never moved again (the repository guards the update).

use std::sync::Arc;

use realty_core::error::CoreError;
use realty_core::types::DbId;
use realty_core::validation::{validate_amount, DEFAULT_CURRENCY};
use realty_db::models::transaction::{CreateTransaction, Notes};
use realty_db::repositories::TransactionRepo;
use serde::Deserialize;
use sqlx::PgPool;

use crate::gateway::{GatewayError, GatewayOrder, OrderRequest, PaymentGateway};

/// Client-facing order request. Missing fields fall back to defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderInput {
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: Option<String>,
    pub receipt: Option<String>,
    pub notes: Option<Notes>,
}

/// Errors from the payment bridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Signature mismatch. The reason is logged, never returned.
    #[error("Payment verification failed")]
    VerificationFailed,
}

/// Wraps a [`PaymentGateway`] with the transaction ledger.
#[derive(Clone)]
pub struct PaymentBridge {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentBridge {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Create a gateway order and record it as a `created` transaction.
    ///
    /// Nothing is written if validation or the gateway call fails.
    pub async fn create_order(
        &self,
        pool: &PgPool,
        input: CreateOrderInput,
        user_id: Option<DbId>,
    ) -> Result<GatewayOrder, BridgeError> {
        validate_amount(input.amount)?;

        let request = OrderRequest {
            amount: input.amount,
            currency: input
                .currency
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            receipt: input
                .receipt
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            notes: input.notes,
        };

        let order = self.gateway.create_order(&request).await?;

        TransactionRepo::create(
            pool,
            &CreateTransaction {
                user_id,
                order_id: order.id.clone(),
                amount: request.amount,
                currency: request.currency.clone(),
                notes: request.notes.clone(),
            },
        )
        .await?;

        tracing::info!(
            order_id = %order.id,
            amount = request.amount,
            user_id = ?user_id,
            "Payment order created",
        );

        Ok(order)
    }

    /// Check a checkout signature and settle the matching transaction.
    pub async fn verify(
        &self,
        pool: &PgPool,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<(), BridgeError> {
        if !self.gateway.verify_signature(order_id, payment_id, signature) {
            tracing::warn!(order_id, payment_id, "Payment signature mismatch");
            match TransactionRepo::mark_failed(pool, order_id).await {
                Ok(true) => {}
                Ok(false) => tracing::warn!(order_id, "No pending transaction to mark failed"),
                Err(e) => {
                    tracing::error!(order_id, error = %e, "Failed to mark transaction failed")
                }
            }
            return Err(BridgeError::VerificationFailed);
        }

        let moved = TransactionRepo::mark_paid(pool, order_id, payment_id).await?;
        if moved {
            tracing::info!(order_id, payment_id, "Payment verified");
        } else {
            tracing::warn!(
                order_id,
                payment_id,
                "Valid signature but no pending transaction for order",
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use sqlx::postgres::PgPoolOptions;

    use super::*;

    /// In-process gateway recording every order request.
    #[derive(Default)]
    struct RecordingGateway {
        calls: AtomicUsize,
        last: Mutex<Option<OrderRequest>>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl PaymentGateway for RecordingGateway {
        async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            if self.fail {
                return Err(GatewayError::Api {
                    status: 400,
                    body: "amount too small".to_string(),
                });
            }
            Ok(GatewayOrder {
                id: "order_test".to_string(),
                amount: request.amount,
                currency: request.currency.clone(),
                receipt: Some(request.receipt.clone()),
                status: Some("created".to_string()),
                extra: Default::default(),
            })
        }

        fn verify_signature(&self, _: &str, _: &str, signature: &str) -> bool {
            signature == "good"
        }
    }

    /// A pool that never connects; any query against it would fail.
    fn unreachable_pool() -> PgPool {
        PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(200))
            .connect_lazy("postgres://nobody@127.0.0.1:1/none")
            .unwrap()
    }

    #[tokio::test]
    async fn non_positive_amount_never_reaches_the_gateway() {
        let gateway = Arc::new(RecordingGateway::default());
        let bridge = PaymentBridge::new(gateway.clone());

        let input = CreateOrderInput {
            amount: 0,
            currency: None,
            receipt: None,
            notes: None,
        };
        let err = bridge
            .create_order(&unreachable_pool(), input, None)
            .await
            .unwrap_err();

        assert_matches!(err, BridgeError::Validation(CoreError::Validation(_)));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn gateway_failure_is_surfaced_before_any_write() {
        let gateway = Arc::new(RecordingGateway {
            fail: true,
            ..Default::default()
        });
        let bridge = PaymentBridge::new(gateway.clone());

        let input = CreateOrderInput {
            amount: 100,
            currency: Some(String::new()),
            receipt: None,
            notes: None,
        };
        let err = bridge
            .create_order(&unreachable_pool(), input, None)
            .await
            .unwrap_err();

        assert_matches!(err, BridgeError::Gateway(GatewayError::Api { status: 400, .. }));

        let sent = gateway.last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.currency, "INR");
        assert!(uuid::Uuid::parse_str(&sent.receipt).is_ok());
    }

    #[tokio::test]
    async fn bad_signature_is_rejected_even_when_the_store_is_down() {
        let bridge = PaymentBridge::new(Arc::new(RecordingGateway::default()));

        let err = bridge
            .verify(&unreachable_pool(), "order_test", "pay_test", "forged")
            .await
            .unwrap_err();

        assert_matches!(err, BridgeError::VerificationFailed);
    }
}
