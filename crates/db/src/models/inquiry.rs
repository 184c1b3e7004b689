//! Contact inquiry entity model and DTOs.

use realty_core::status::{InquiryStatus, InquiryType};
use realty_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An inquiry row from the `inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inquiry {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    #[sqlx(try_from = "String")]
    pub inquiry_type: InquiryType,
    pub preferred_time: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: InquiryStatus,
    pub created_at: Timestamp,
}

/// DTO for the public contact form. Status always starts at `new`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub inquiry_type: InquiryType,
    pub preferred_time: Option<String>,
}
