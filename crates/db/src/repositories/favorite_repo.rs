//! Repository for the `user_favorites` table.
//!
//! Each user's favourites are a set: adding an existing member and removing
//! an absent one are both no-ops.

use realty_core::types::DbId;
use sqlx::PgPool;

/// Set operations over a user's favourite project ids.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Add `project_id` to the user's set. Returns `true` if it was not
    /// already a member.
    pub async fn add(pool: &PgPool, user_id: DbId, project_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_favorites (user_id, project_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, project_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(project_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove `project_id` from the user's set. Returns `true` if it was a
    /// member.
    pub async fn remove(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM user_favorites WHERE user_id = $1 AND project_id = $2")
                .bind(user_id)
                .bind(project_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The user's favourite project ids, oldest first.
    pub async fn list_project_ids(pool: &PgPool, user_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT project_id FROM user_favorites
             WHERE user_id = $1
             ORDER BY created_at, project_id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
