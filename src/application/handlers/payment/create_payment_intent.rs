//! CreatePaymentIntentHandler - command handler for creating a payment intent.

use std::sync::Arc;

use crate::ports::{CreatePaymentIntentRequest, PaymentError, PaymentIntent, PaymentProvider};

/// Command to create a payment intent for the given amount.
#[derive(Debug, Clone)]
pub struct CreatePaymentIntentCommand {
    /// Amount in the smallest unit of the configured currency.
    pub amount: i64,
}

/// Result of successful intent creation.
#[derive(Debug, Clone)]
pub struct CreatePaymentIntentResult {
    /// Opaque token the calling client uses to complete the payment.
    pub client_secret: String,

    /// The full intent as returned by the provider.
    pub intent: PaymentIntent,
}

/// Handler for creating payment intents.
///
/// The currency is fixed per deployment and never taken from the command.
/// The amount is forwarded to the provider exactly as received, without
/// bounds or sign checks; the provider is the sole authority on whether an
/// amount is acceptable. Every intent requests automatic payment method
/// selection.
pub struct CreatePaymentIntentHandler {
    payment_provider: Arc<dyn PaymentProvider>,
    currency: String,
}

impl CreatePaymentIntentHandler {
    pub fn new(payment_provider: Arc<dyn PaymentProvider>, currency: impl Into<String>) -> Self {
        Self {
            payment_provider,
            currency: currency.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentIntentCommand,
    ) -> Result<CreatePaymentIntentResult, PaymentError> {
        let intent = self
            .payment_provider
            .create_payment_intent(CreatePaymentIntentRequest {
                amount: cmd.amount,
                currency: self.currency.clone(),
                automatic_payment_methods: true,
            })
            .await?;

        Ok(CreatePaymentIntentResult {
            client_secret: intent.client_secret.clone(),
            intent,
        })
    }
}
