pub mod admin;
pub mod auth;
pub mod blog;
pub mod contact;
pub mod health;
pub mod payment;
pub mod project;
pub mod resource;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                  register (public)
/// /auth/login                     login (public)
/// /auth/me                        current user (requires auth)
///
/// /projects                       list (public), create (admin)
/// /projects/{slug}                get by slug (public)
/// /projects/{id}                  update, delete (admin)
///
/// /blog                           list published (public), create (admin)
/// /blog/{slug}                    get by slug (public)
///
/// /contact                        submit (public), list (admin)
/// /contact/{id}/status            update status (admin)
///
/// /resources                      list (optional auth), create (admin)
///
/// /payments/create-order          create gateway order (optional auth)
/// /payments/verify                verify checkout signature (public)
///
/// /users/favorites                list (requires auth)
/// /users/favorites/{id}           add, remove (requires auth)
///
/// /admin/analytics                dashboard counts (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/blog", blog::router())
        .nest("/contact", contact::router())
        .nest("/resources", resource::router())
        .nest("/payments", payment::router())
        .nest("/users", user::router())
        .nest("/admin", admin::router())
}
