use std::sync::Arc;

use realty_payments::PaymentBridge;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: realty_db::DbPool,
    /// Server configuration (JWT secret, password cost, CORS, ...).
    pub config: Arc<ServerConfig>,
    /// Payment bridge, absent when no gateway credentials are configured.
    pub payments: Option<Arc<PaymentBridge>>,
}
