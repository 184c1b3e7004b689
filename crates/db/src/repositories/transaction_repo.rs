//! Repository for the `transactions` table.
//!
//! Status updates are guarded by [`TransactionStatus::sources_for`], so a
//! `paid` transaction is never moved again.

use realty_core::status::TransactionStatus;
use realty_core::types::new_id;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::transaction::{CreateTransaction, Transaction};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, order_id, payment_id, amount, currency, status, notes, created_at";

/// Provides operations for payment transactions.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Record a freshly created gateway order with status `created`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions (id, user_id, order_id, amount, currency, status, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(new_id())
            .bind(input.user_id)
            .bind(&input.order_id)
            .bind(input.amount)
            .bind(&input.currency)
            .bind(TransactionStatus::Created.as_str())
            .bind(input.notes.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }

    /// Find the transaction for a gateway order id.
    pub async fn find_by_order_id(
        pool: &PgPool,
        order_id: &str,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM transactions WHERE order_id = $1");
        sqlx::query_as::<_, Transaction>(&query)
            .bind(order_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark an order as paid and record the gateway payment id.
    ///
    /// Returns `true` if a transaction was moved to `paid`.
    pub async fn mark_paid(
        pool: &PgPool,
        order_id: &str,
        payment_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE transactions SET status = $3, payment_id = $2
             WHERE order_id = $1 AND status = ANY($4)",
        )
        .bind(order_id)
        .bind(payment_id)
        .bind(TransactionStatus::Paid.as_str())
        .bind(TransactionStatus::sources_for(TransactionStatus::Paid))
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark an order as failed. `payment_id` is left untouched.
    ///
    /// Returns `true` if a transaction was moved to `failed`.
    pub async fn mark_failed(pool: &PgPool, order_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE transactions SET status = $2
             WHERE order_id = $1 AND status = ANY($3)",
        )
        .bind(order_id)
        .bind(TransactionStatus::Failed.as_str())
        .bind(TransactionStatus::sources_for(TransactionStatus::Failed))
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
