//! Repository for the `inquiries` table.

use realty_core::status::InquiryStatus;
use realty_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::inquiry::{CreateInquiry, Inquiry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, phone, email, message, inquiry_type, preferred_time, status, created_at";

/// Provides operations for contact inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert a new inquiry with status `new`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateInquiry) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries (id, name, phone, email, message, inquiry_type, preferred_time, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.message)
            .bind(input.inquiry_type.as_str())
            .bind(&input.preferred_time)
            .bind(InquiryStatus::New.as_str())
            .fetch_one(pool)
            .await
    }

    /// List inquiries newest first, optionally narrowed to one status.
    pub async fn list(
        pool: &PgPool,
        status: Option<InquiryStatus>,
    ) -> Result<Vec<Inquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inquiries
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(status.map(InquiryStatus::as_str))
            .fetch_all(pool)
            .await
    }

    /// Set an inquiry's status. Any status may replace any other.
    ///
    /// Returns `true` if a row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: InquiryStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE inquiries SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
