//! Transaction bookkeeping of the payment bridge against a real database.

use std::collections::BTreeMap;
use std::sync::Arc;

use assert_matches::assert_matches;
use realty_core::status::TransactionStatus;
use realty_db::repositories::TransactionRepo;
use realty_payments::signature::compute_signature;
use realty_payments::{
    BridgeError, CreateOrderInput, GatewayError, GatewayOrder, OrderRequest, PaymentBridge,
    PaymentGateway,
};
use sqlx::PgPool;

const SECRET: &str = "test_secret";

/// Gateway that hands out sequential order ids and checks real signatures.
struct FakeGateway {
    next: std::sync::atomic::AtomicUsize,
}

#[async_trait::async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, GatewayError> {
        let n = self.next.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(GatewayOrder {
            id: format!("order_{n}"),
            amount: request.amount,
            currency: request.currency.clone(),
            receipt: Some(request.receipt.clone()),
            status: Some("created".to_string()),
            extra: Default::default(),
        })
    }

    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        realty_payments::signature::verify_signature(SECRET, order_id, payment_id, signature)
    }
}

fn bridge() -> PaymentBridge {
    PaymentBridge::new(Arc::new(FakeGateway {
        next: Default::default(),
    }))
}

fn order(amount: i64) -> CreateOrderInput {
    CreateOrderInput {
        amount,
        currency: None,
        receipt: Some("booking-42".to_string()),
        notes: Some(BTreeMap::from([("unit".to_string(), "A-1203".to_string())])),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_order_records_a_created_transaction(pool: PgPool) {
    let created = bridge().create_order(&pool, order(250_000), None).await.unwrap();
    assert_eq!(created.receipt.as_deref(), Some("booking-42"));

    let tx = TransactionRepo::find_by_order_id(&pool, &created.id)
        .await
        .unwrap()
        .expect("transaction should be recorded");
    assert_eq!(tx.status, TransactionStatus::Created);
    assert_eq!(tx.amount, 250_000);
    assert_eq!(tx.currency, "INR");
    assert!(tx.user_id.is_none());
    assert_eq!(tx.notes.unwrap().0["unit"], "A-1203");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn valid_signature_marks_paid(pool: PgPool) {
    let bridge = bridge();
    let created = bridge.create_order(&pool, order(1_000), None).await.unwrap();
    let sig = compute_signature(SECRET, &created.id, "pay_ok");

    bridge.verify(&pool, &created.id, "pay_ok", &sig).await.unwrap();

    let tx = TransactionRepo::find_by_order_id(&pool, &created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(tx.status, TransactionStatus::Paid);
    assert_eq!(tx.payment_id.as_deref(), Some("pay_ok"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tampered_signature_marks_failed(pool: PgPool) {
    let bridge = bridge();
    let created = bridge.create_order(&pool, order(1_000), None).await.unwrap();
    let sig = compute_signature(SECRET, &created.id, "pay_other");

    let err = bridge
        .verify(&pool, &created.id, "pay_bad", &sig)
        .await
        .unwrap_err();
    assert_matches!(err, BridgeError::VerificationFailed);

    let tx = TransactionRepo::find_by_order_id(&pool, &created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(tx.status, TransactionStatus::Failed);
    assert!(tx.payment_id.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn paid_transaction_survives_a_later_bad_signature(pool: PgPool) {
    let bridge = bridge();
    let created = bridge.create_order(&pool, order(1_000), None).await.unwrap();
    let sig = compute_signature(SECRET, &created.id, "pay_ok");
    bridge.verify(&pool, &created.id, "pay_ok", &sig).await.unwrap();

    let err = bridge
        .verify(&pool, &created.id, "pay_ok", "deadbeef")
        .await
        .unwrap_err();
    assert_matches!(err, BridgeError::VerificationFailed);

    let tx = TransactionRepo::find_by_order_id(&pool, &created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(tx.status, TransactionStatus::Paid);
    assert_eq!(tx.payment_id.as_deref(), Some("pay_ok"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejected_amount_writes_nothing(pool: PgPool) {
    let err = bridge().create_order(&pool, order(-5), None).await.unwrap_err();
    assert_matches!(err, BridgeError::Validation(_));

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM transactions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}
