//! HTTP handlers for the payment endpoints.
//!
//! These handlers connect axum routes to the application layer command
//! handlers.

use std::sync::Arc;

use axum::extract::{Json, State};

use crate::application::handlers::payment::{
    CreatePaymentIntentCommand, CreatePaymentIntentHandler,
};
use crate::ports::PaymentProvider;

use super::dto::{CreateIntentRequest, IntentResponse};

/// Shared application state containing the payment dependencies.
///
/// Cloned per request; the provider is Arc-wrapped for cheap sharing and
/// the currency is fixed at startup from configuration.
#[derive(Clone)]
pub struct PaymentAppState {
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub currency: String,
}

impl PaymentAppState {
    /// Create the intent handler on demand from the shared state.
    pub fn create_payment_intent_handler(&self) -> CreatePaymentIntentHandler {
        CreatePaymentIntentHandler::new(self.payment_provider.clone(), self.currency.clone())
    }
}

/// POST /api/payments/intent - Create a payment intent for the given amount.
///
/// Always answers `200 OK`: processor failures are logged and folded into
/// the body as `{"error": ...}` rather than surfaced as an error status.
/// Callers must branch on the body shape.
pub async fn create_payment_intent(
    State(state): State<PaymentAppState>,
    Json(request): Json<CreateIntentRequest>,
) -> Json<IntentResponse> {
    let handler = state.create_payment_intent_handler();
    let cmd = CreatePaymentIntentCommand {
        amount: request.amount,
    };

    match handler.handle(cmd).await {
        Ok(result) => Json(IntentResponse::Completed {
            client_secret: result.client_secret,
        }),
        Err(error) => {
            tracing::error!(
                code = %error.code,
                provider_code = ?error.provider_code,
                error = %error.message,
                "Stripe create_payment_intent failed"
            );
            Json(IntentResponse::Failed {
                error: error.message,
            })
        }
    }
}
