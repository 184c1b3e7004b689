//! Handlers for the signed-in user's favourite projects.
//!
//! Favourites are a set: adding twice and removing an absent id both succeed.
//! An id that is not a UUID names no project, so both are no-ops for it.

use axum::extract::State;
use axum::Json;
use realty_db::models::project::Project;
use realty_db::repositories::{FavoriteRepo, ProjectRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::path::IdPath;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/users/favorites/{project_id}
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    raw_id: IdPath,
) -> AppResult<Json<MessageResponse>> {
    if let Some(project_id) = raw_id.parse() {
        let inserted = FavoriteRepo::add(&state.pool, user.id(), project_id).await?;
        tracing::debug!(user_id = %user.id(), %project_id, inserted, "Favourite added");
    }
    Ok(Json(MessageResponse::new("Added to favorites")))
}

/// DELETE /api/users/favorites/{project_id}
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    raw_id: IdPath,
) -> AppResult<Json<MessageResponse>> {
    if let Some(project_id) = raw_id.parse() {
        let removed = FavoriteRepo::remove(&state.pool, user.id(), project_id).await?;
        tracing::debug!(user_id = %user.id(), %project_id, removed, "Favourite removed");
    }
    Ok(Json(MessageResponse::new("Removed from favorites")))
}

/// GET /api/users/favorites
///
/// Ids whose project has since been deleted are skipped.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<Vec<Project>>> {
    let ids = FavoriteRepo::list_project_ids(&state.pool, user.id()).await?;
    if ids.is_empty() {
        return Ok(Json(Vec::new()));
    }
    let projects = ProjectRepo::list_by_ids(&state.pool, &ids).await?;
    Ok(Json(projects))
}
