//! Repository for the `resources` table.

use realty_core::status::ResourceCategory;
use realty_core::types::new_id;
use sqlx::PgPool;

use crate::models::resource::{CreateResource, Resource};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, file_url, category, requires_auth, created_at";

/// Provides create and list operations for downloadable resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a new resource, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources (id, title, description, file_url, category, requires_auth)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(new_id())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.file_url)
            .bind(input.category.as_str())
            .bind(input.requires_auth)
            .fetch_one(pool)
            .await
    }

    /// List resources in insertion order, optionally narrowed to a category.
    ///
    /// Rows with `requires_auth = true` are only returned when
    /// `include_gated` is set.
    pub async fn list(
        pool: &PgPool,
        category: Option<ResourceCategory>,
        include_gated: bool,
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM resources
             WHERE ($1::TEXT IS NULL OR category = $1)
               AND ($2 OR requires_auth = FALSE)
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(category.map(ResourceCategory::as_str))
            .bind(include_gated)
            .fetch_all(pool)
            .await
    }
}
