//! User entity model and DTOs.

use realty_core::roles::Role;
use realty_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
    /// Favourite project ids, oldest first.
    pub favorites: Vec<DbId>,
    pub created_at: Timestamp,
}

impl UserResponse {
    /// Strip the credential and attach the favourites set.
    pub fn from_user(user: User, favorites: Vec<DbId>) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            phone: user.phone,
            role: user.role,
            favorites,
            created_at: user.created_at,
        }
    }
}

/// DTO for inserting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: Role,
}
