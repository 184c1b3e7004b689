//! Route definitions for the `/payments` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// POST /create-order -> create_order
/// POST /verify       -> verify
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-order", post(payment::create_order))
        .route("/verify", post(payment::verify))
}
