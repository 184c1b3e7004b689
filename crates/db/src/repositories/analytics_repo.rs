//! Repository for cross-table admin counts.

use realty_core::roles::Role;
use realty_core::status::{InquiryStatus, TransactionStatus};
use sqlx::PgPool;

use crate::models::analytics::AnalyticsSnapshot;

/// Read-only aggregate queries.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Gather every dashboard count in a single round trip.
    pub async fn snapshot(pool: &PgPool) -> Result<AnalyticsSnapshot, sqlx::Error> {
        sqlx::query_as::<_, AnalyticsSnapshot>(
            "SELECT
                (SELECT COUNT(*) FROM projects) AS projects,
                (SELECT COUNT(*) FROM inquiries) AS inquiries,
                (SELECT COUNT(*) FROM inquiries WHERE status = $1) AS new_inquiries,
                (SELECT COUNT(*) FROM users WHERE role = $2) AS users,
                (SELECT COUNT(*) FROM transactions) AS transactions,
                (SELECT COUNT(*) FROM transactions WHERE status = $3) AS successful_payments",
        )
        .bind(InquiryStatus::New.as_str())
        .bind(Role::Customer.as_str())
        .bind(TransactionStatus::Paid.as_str())
        .fetch_one(pool)
        .await
    }
}
