//! Payment gateway integration.
//!
//! - [`gateway`] -- the [`PaymentGateway`] trait and its request/response types.
//! - [`razorpay`] -- the Razorpay REST implementation.
//! - [`signature`] -- HMAC-SHA256 checkout signature helpers.
//! - [`bridge`] -- [`PaymentBridge`], which pairs gateway calls with
//!   transaction bookkeeping.

pub mod bridge;
pub mod gateway;
pub mod razorpay;
pub mod signature;

pub use bridge::{BridgeError, CreateOrderInput, PaymentBridge};
pub use gateway::{GatewayConfig, GatewayError, GatewayOrder, OrderRequest, PaymentGateway};
pub use razorpay::RazorpayGateway;
