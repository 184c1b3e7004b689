//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use realty_core::error::CoreError;
use realty_core::status::{parse_filter, ProjectStatus};
use realty_core::validation::{require_non_empty, validate_slug};
use realty_db::models::project::{CreateProject, Project};
use realty_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::path::IdPath;
use crate::query::StatusFilter;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_project(&input)?;

    if ProjectRepo::find_by_slug(&state.pool, &input.slug)
        .await?
        .is_some()
    {
        return Err(slug_taken());
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = %project.id, slug = %project.slug, admin_id = %admin.id(), "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<StatusFilter>,
) -> AppResult<Json<Vec<Project>>> {
    let status = parse_filter::<ProjectStatus>(params.status.as_deref())?;
    let projects = ProjectRepo::list(&state.pool, status).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| project_not_found(&slug))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
///
/// Replaces every field of the project.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    raw_id: IdPath,
    Json(input): Json<CreateProject>,
) -> AppResult<Json<MessageResponse>> {
    validate_project(&input)?;
    let id = raw_id.parse().ok_or_else(|| project_not_found(raw_id.as_str()))?;

    if let Some(existing) = ProjectRepo::find_by_slug(&state.pool, &input.slug).await? {
        if existing.id != id {
            return Err(slug_taken());
        }
    }

    ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    Ok(Json(MessageResponse::new("Project updated")))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    raw_id: IdPath,
) -> AppResult<Json<MessageResponse>> {
    let id = raw_id.parse().ok_or_else(|| project_not_found(raw_id.as_str()))?;
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(project_not_found(id));
    }
    tracing::info!(project_id = %id, admin_id = %admin.id(), "Project deleted");
    Ok(Json(MessageResponse::new("Project deleted")))
}

fn validate_project(input: &CreateProject) -> Result<(), CoreError> {
    validate_slug(&input.slug)?;
    require_non_empty("title", &input.title)?;
    require_non_empty("location", &input.location)?;
    Ok(())
}

fn project_not_found(id: impl ToString) -> AppError {
    AppError::Core(CoreError::not_found("Project", id))
}

fn slug_taken() -> AppError {
    AppError::Duplicate("Slug already in use".into())
}
