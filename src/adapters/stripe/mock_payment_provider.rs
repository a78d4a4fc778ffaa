//! Mock payment provider for testing.
//!
//! Provides a configurable implementation of `PaymentProvider` for unit and
//! integration tests: canned intents, error injection, and request
//! recording.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{
    CreatePaymentIntentRequest, PaymentError, PaymentIntent, PaymentProvider,
};

/// Mock payment provider for testing.
///
/// By default every call succeeds with an intent echoing the request. Use
/// [`set_intent`](Self::set_intent) or [`set_error`](Self::set_error) to
/// override the next responses, and
/// [`recorded_requests`](Self::recorded_requests) to assert what was sent.
#[derive(Default)]
pub struct MockPaymentProvider {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Intent returned on every call when set.
    intent: Option<PaymentIntent>,

    /// Error returned on every call when set; takes precedence over the
    /// configured intent.
    error: Option<PaymentError>,

    /// Requests received, in call order.
    requests: Vec<CreatePaymentIntentRequest>,
}

impl MockPaymentProvider {
    /// Create a mock that succeeds with request-echoing intents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that returns the given intent on every call.
    pub fn returning(intent: PaymentIntent) -> Self {
        let mock = Self::new();
        mock.set_intent(intent);
        mock
    }

    /// Create a mock that fails every call with the given error.
    pub fn failing(error: PaymentError) -> Self {
        let mock = Self::new();
        mock.set_error(error);
        mock
    }

    /// Set the intent to return on subsequent calls.
    pub fn set_intent(&self, intent: PaymentIntent) {
        self.inner.lock().unwrap().intent = Some(intent);
    }

    /// Set the error to return on subsequent calls.
    pub fn set_error(&self, error: PaymentError) {
        self.inner.lock().unwrap().error = Some(error);
    }

    /// Requests recorded so far, in call order.
    pub fn recorded_requests(&self) -> Vec<CreatePaymentIntentRequest> {
        self.inner.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_payment_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        let mut state = self.inner.lock().unwrap();
        state.requests.push(request.clone());

        if let Some(error) = state.error.clone() {
            return Err(error);
        }

        if let Some(intent) = state.intent.clone() {
            return Ok(intent);
        }

        Ok(PaymentIntent {
            id: "pi_mock".to_string(),
            client_secret: "pi_mock_secret_mock".to_string(),
            amount: request.amount,
            currency: request.currency,
            status: "requires_payment_method".to_string(),
            created: 1704067200,
        })
    }
}
