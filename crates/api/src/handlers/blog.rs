//! Handlers for the `/blog` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use realty_core::error::CoreError;
use realty_core::status::{parse_filter, BlogCategory};
use realty_core::validation::{clamp_limit, require_non_empty, validate_slug, DEFAULT_BLOG_LIMIT};
use realty_db::models::blog_post::{BlogPost, CreateBlogPost};
use realty_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::BlogListParams;
use crate::state::AppState;

/// POST /api/blog
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    validate_slug(&input.slug)?;
    require_non_empty("title", &input.title)?;

    if BlogPostRepo::find_by_slug(&state.pool, &input.slug)
        .await?
        .is_some()
    {
        return Err(AppError::Duplicate("Slug already in use".into()));
    }

    let post = BlogPostRepo::create(&state.pool, &input).await?;
    tracing::info!(post_id = %post.id, slug = %post.slug, published = post.published, "Blog post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/blog
///
/// Published posts only, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<BlogListParams>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let category = parse_filter::<BlogCategory>(params.category.as_deref())?;
    let limit = clamp_limit(params.limit, DEFAULT_BLOG_LIMIT);
    let posts = BlogPostRepo::list_published(&state.pool, category, limit).await?;
    Ok(Json(posts))
}

/// GET /api/blog/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("BlogPost", &slug)))?;
    Ok(Json(post))
}
