//! Downloadable resource entity model and DTOs.

use realty_core::status::ResourceCategory;
use realty_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A resource row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub file_url: String,
    #[sqlx(try_from = "String")]
    pub category: ResourceCategory,
    pub requires_auth: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a resource.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResource {
    pub title: String,
    pub description: String,
    pub file_url: String,
    pub category: ResourceCategory,
    #[serde(default)]
    pub requires_auth: bool,
}
