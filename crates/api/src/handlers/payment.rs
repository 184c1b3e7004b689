//! Handlers for the `/payments` resource.
//!
//! Both endpoints answer 503 before doing anything when no gateway is
//! configured.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use realty_core::error::CoreError;
use realty_payments::{CreateOrderInput, GatewayOrder, PaymentBridge};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /payments/verify`, as posted by the checkout widget.
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// POST /api/payments/create-order
///
/// Public. When a bearer token is supplied the order is attributed to that
/// user.
pub async fn create_order(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    Json(input): Json<CreateOrderInput>,
) -> AppResult<Json<GatewayOrder>> {
    let bridge = bridge(&state)?;
    let order = bridge
        .create_order(&state.pool, input, user.map(|u| u.id()))
        .await?;
    Ok(Json(order))
}

/// POST /api/payments/verify
pub async fn verify(
    State(state): State<AppState>,
    Json(input): Json<VerifyPaymentRequest>,
) -> AppResult<Json<MessageResponse>> {
    let bridge = bridge(&state)?;
    bridge
        .verify(
            &state.pool,
            &input.razorpay_order_id,
            &input.razorpay_payment_id,
            &input.razorpay_signature,
        )
        .await?;
    Ok(Json(MessageResponse::new("Payment verified successfully")))
}

fn bridge(state: &AppState) -> Result<Arc<PaymentBridge>, AppError> {
    state.payments.clone().ok_or_else(|| {
        AppError::Core(CoreError::ServiceUnavailable(
            "Payment gateway not configured".into(),
        ))
    })
}
