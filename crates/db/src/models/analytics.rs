//! Aggregate counts for the admin dashboard.

use serde::Serialize;
use sqlx::FromRow;

/// Row counts across the main tables, gathered in one query.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct AnalyticsSnapshot {
    pub projects: i64,
    pub inquiries: i64,
    pub new_inquiries: i64,
    /// Accounts with the `customer` role.
    pub users: i64,
    pub transactions: i64,
    pub successful_payments: i64,
}
