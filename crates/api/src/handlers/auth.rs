//! Handlers for the `/auth` resource (register, login, me).

use axum::extract::State;
use axum::Json;
use realty_core::error::CoreError;
use realty_core::roles::Role;
use realty_core::validation::{require_non_empty, validate_email, MIN_PASSWORD_LENGTH};
use realty_db::models::user::{CreateUser, User, UserResponse};
use realty_db::repositories::{FavoriteRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::issue_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create an account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Json<TokenResponse>> {
    validate_email(&input.email)?;
    require_non_empty("name", &input.name)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = match input.role.as_deref() {
        None | Some("") => Role::default(),
        Some(raw) => raw.parse::<Role>()?,
    };

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Duplicate("Email already registered".into()));
    }

    let password_hash = hash_password(&input.password, &state.config.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            name: input.name.trim().to_string(),
            phone: input.phone.filter(|p| !p.trim().is_empty()),
            password_hash,
            role,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, role = %user.role, "User registered");

    // A fresh account has no favourites.
    token_response(&state, user, Vec::new()).map(Json)
}

/// POST /api/auth/login
///
/// Authenticate with email + password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !verify_password(&input.password, &user.password_hash) {
        tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
        return Err(invalid_credentials());
    }

    let favorites = FavoriteRepo::list_project_ids(&state.pool, user.id).await?;
    token_response(&state, user, favorites).map(Json)
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
) -> AppResult<Json<UserResponse>> {
    let favorites = FavoriteRepo::list_project_ids(&state.pool, auth.id()).await?;
    Ok(Json(UserResponse::from_user(auth.user, favorites)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}

fn token_response(
    state: &AppState,
    user: User,
    favorites: Vec<realty_core::types::DbId>,
) -> AppResult<TokenResponse> {
    let access_token = issue_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(TokenResponse {
        access_token,
        token_type: "bearer",
        user: UserResponse::from_user(user, favorites),
    })
}
