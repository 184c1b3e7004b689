//! Route definitions for the `/contact` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST /              -> submit
/// GET  /              -> list (admin)
/// PUT  /{id}/status   -> update_status (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list).post(contact::submit))
        .route("/{id}/status", put(contact::update_status))
}
