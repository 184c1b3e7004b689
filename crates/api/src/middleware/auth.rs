//! Bearer-token authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use realty_core::error::CoreError;
use realty_core::roles::Role;
use realty_core::types::DbId;
use realty_db::models::user::User;
use realty_db::repositories::UserRepo;

use crate::auth::jwt::{validate_token, TokenError};
use crate::error::AppError;
use crate::state::AppState;

/// A request whose bearer token resolved to an existing user.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.id(), role = %user.role(), "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn id(&self) -> DbId {
        self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;
        resolve(header, state).await
    }
}

/// Optional identity.
///
/// No `Authorization` header yields `MaybeAuthUser(None)`. A header that is
/// present must resolve, otherwise the request is rejected with 401 exactly
/// like [`AuthUser`].
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match parts.headers.get(AUTHORIZATION) {
            None => Ok(MaybeAuthUser(None)),
            Some(header) => resolve(header, state).await.map(|u| MaybeAuthUser(Some(u))),
        }
    }
}

/// Turn an `Authorization` header value into the user it names.
async fn resolve(header: &axum::http::HeaderValue, state: &AppState) -> Result<AuthUser, AppError> {
    let token = header
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

    let claims = validate_token(token, &state.config.jwt).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        match e {
            TokenError::Expired => unauthorized("Token has expired"),
            TokenError::Malformed => unauthorized("Invalid token"),
        }
    })?;

    // A valid token for a user that no longer exists is still a 401, not a 404.
    let user = UserRepo::find_by_id(&state.pool, claims.sub)
        .await?
        .ok_or_else(|| unauthorized("User not found"))?;

    Ok(AuthUser { user })
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}
