//! Payment transaction entity model and DTOs.

use std::collections::BTreeMap;

use realty_core::status::TransactionStatus;
use realty_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// Free-form string notes forwarded to and from the gateway.
pub type Notes = BTreeMap<String, String>;

/// A transaction row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    /// Caller's account when the order was placed with a bearer token.
    pub user_id: Option<DbId>,
    /// Gateway-assigned order id.
    pub order_id: String,
    /// Set once a payment signature has been verified.
    pub payment_id: Option<String>,
    /// Minor currency units.
    pub amount: i64,
    pub currency: String,
    #[sqlx(try_from = "String")]
    pub status: TransactionStatus,
    pub notes: Option<Json<Notes>>,
    pub created_at: Timestamp,
}

/// DTO for recording a freshly created gateway order.
#[derive(Debug, Clone)]
pub struct CreateTransaction {
    pub user_id: Option<DbId>,
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub notes: Option<Notes>,
}
