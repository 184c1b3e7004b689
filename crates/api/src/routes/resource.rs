//! Route definitions for the `/resources` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/resources`.
///
/// ```text
/// GET  / -> list
/// POST / -> create (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(resource::list).post(resource::create))
}
