//! Repository for the `projects` table.

use realty_core::status::ProjectStatus;
use realty_core::types::{new_id, DbId};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, tagline, description, location, status, images, \
                       hero_image, amenities, floor_plans, coordinates, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, title, slug, tagline, description, location, status,
                                   images, hero_image, amenities, floor_plans, coordinates)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(new_id())
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.status.as_str())
            .bind(&input.images)
            .bind(&input.hero_image)
            .bind(&input.amenities)
            .bind(Json(&input.floor_plans))
            .bind(input.coordinates.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its public slug (exact match).
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List projects in insertion order, optionally narrowed to one status.
    pub async fn list(
        pool: &PgPool,
        status: Option<ProjectStatus>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(status.map(ProjectStatus::as_str))
            .fetch_all(pool)
            .await
    }

    /// Fetch the projects whose ids are in `ids`, in insertion order. Unknown
    /// ids are skipped.
    pub async fn list_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE id = ANY($1) ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Replace every editable field of a project and bump `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = $2,
                slug = $3,
                tagline = $4,
                description = $5,
                location = $6,
                status = $7,
                images = $8,
                hero_image = $9,
                amenities = $10,
                floor_plans = $11,
                coordinates = $12,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.status.as_str())
            .bind(&input.images)
            .bind(&input.hero_image)
            .bind(&input.amenities)
            .bind(Json(&input.floor_plans))
            .bind(input.coordinates.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
