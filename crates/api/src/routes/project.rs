//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// The single path segment is a slug for `GET` and an id for `PUT`/`DELETE`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{slug}  -> get_by_slug
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{key}",
            get(project::get_by_slug)
                .put(project::update)
                .delete(project::delete),
        )
}
