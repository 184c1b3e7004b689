//! Handlers for the `/contact` resource (public form, admin follow-up).

use axum::extract::{Query, State};
use axum::Json;
use realty_core::error::CoreError;
use realty_core::status::{parse_filter, InquiryStatus};
use realty_core::validation::{require_non_empty, validate_email};
use realty_db::models::inquiry::{CreateInquiry, Inquiry};
use realty_db::repositories::InquiryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::path::IdPath;
use crate::query::{StatusFilter, StatusUpdateParams};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/contact
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<CreateInquiry>,
) -> AppResult<Json<MessageResponse>> {
    require_non_empty("name", &input.name)?;
    require_non_empty("phone", &input.phone)?;
    require_non_empty("message", &input.message)?;
    validate_email(&input.email)?;

    let inquiry = InquiryRepo::create(&state.pool, &input).await?;
    tracing::info!(inquiry_id = %inquiry.id, inquiry_type = %inquiry.inquiry_type, "Inquiry submitted");
    Ok(Json(MessageResponse::with_id(
        "Inquiry submitted successfully",
        inquiry.id,
    )))
}

/// GET /api/contact
///
/// Newest first, optionally filtered by `?status=`.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<StatusFilter>,
) -> AppResult<Json<Vec<Inquiry>>> {
    let status = parse_filter::<InquiryStatus>(params.status.as_deref())?;
    let inquiries = InquiryRepo::list(&state.pool, status).await?;
    Ok(Json(inquiries))
}

/// PUT /api/contact/{id}/status?status=
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    raw_id: IdPath,
    Query(params): Query<StatusUpdateParams>,
) -> AppResult<Json<MessageResponse>> {
    let status: InquiryStatus = params.status.trim().parse()?;

    let updated = match raw_id.parse() {
        Some(id) => InquiryRepo::update_status(&state.pool, id, status).await?,
        None => false,
    };
    if !updated {
        return Err(AppError::Core(CoreError::not_found("Inquiry", raw_id.as_str())));
    }
    Ok(Json(MessageResponse::new("Status updated")))
}
