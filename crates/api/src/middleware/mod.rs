//! Identity extractors.
//!
//! - [`auth::AuthUser`] -- resolves the bearer token to a stored user.
//! - [`auth::MaybeAuthUser`] -- same, but an absent header means anonymous.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//! - [`rbac::RequireAuth`] -- requires any authenticated user.

pub mod auth;
pub mod rbac;
