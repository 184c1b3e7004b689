//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /favorites       -> list
/// POST   /favorites/{id}  -> add
/// DELETE /favorites/{id}  -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(favorite::list))
        .route(
            "/favorites/{project_id}",
            post(favorite::add).delete(favorite::remove),
        )
}
