//! Path-parameter extraction that reports failures through [`AppError`].

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use realty_core::types::DbId;

use crate::error::AppError;

/// A single `{id}` path segment, kept as the raw string.
///
/// Ids are UUIDs in storage, but callers may hold ids in other shapes. A
/// segment that is not a UUID cannot name any row, so handlers treat
/// [`IdPath::parse`] returning `None` as a miss instead of a malformed
/// request.
#[derive(Debug, Clone)]
pub struct IdPath(pub String);

impl IdPath {
    pub fn parse(&self) -> Option<DbId> {
        DbId::parse_str(self.0.trim()).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for IdPath {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(IdPath(raw))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
