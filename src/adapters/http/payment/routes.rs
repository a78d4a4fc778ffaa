//! Axum router configuration for the payment endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_payment_intent, PaymentAppState};

/// Create the payment API router.
///
/// # Routes
/// - `POST /intent` - Create a payment intent and return its client secret
pub fn payment_routes() -> Router<PaymentAppState> {
    Router::new().route("/intent", post(create_payment_intent))
}

/// Create the complete payment module router, suitable for mounting at
/// `/api`.
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new().nest("/payments", payment_routes())
}
