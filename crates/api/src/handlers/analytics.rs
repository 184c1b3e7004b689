//! Admin dashboard counts.

use axum::extract::State;
use axum::Json;
use realty_db::models::analytics::AnalyticsSnapshot;
use realty_db::repositories::AnalyticsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/admin/analytics
pub async fn get_analytics(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<AnalyticsSnapshot>> {
    let snapshot = AnalyticsRepo::snapshot(&state.pool).await?;
    Ok(Json(snapshot))
}
