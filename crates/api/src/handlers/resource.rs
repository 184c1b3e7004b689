//! Handlers for the `/resources` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use realty_core::status::{parse_filter, ResourceCategory};
use realty_core::validation::require_non_empty;
use realty_db::models::resource::{CreateResource, Resource};
use realty_db::repositories::ResourceRepo;

use crate::error::AppResult;
use crate::middleware::auth::MaybeAuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::CategoryFilter;
use crate::state::AppState;

/// POST /api/resources
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateResource>,
) -> AppResult<(StatusCode, Json<Resource>)> {
    require_non_empty("title", &input.title)?;
    require_non_empty("file_url", &input.file_url)?;

    let resource = ResourceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// GET /api/resources
///
/// Anonymous callers never see `requires_auth` resources; any signed-in
/// user sees everything.
pub async fn list(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    Query(params): Query<CategoryFilter>,
) -> AppResult<Json<Vec<Resource>>> {
    let category = parse_filter::<ResourceCategory>(params.category.as_deref())?;
    let resources = ResourceRepo::list(&state.pool, category, user.is_some()).await?;
    Ok(Json(resources))
}
