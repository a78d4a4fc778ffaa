//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` trait with one call to the Stripe API:
//! `POST /v1/payment_intents`. Requests are form-encoded with HTTP basic
//! auth, per Stripe's API conventions. Stripe's own error message is
//! surfaced verbatim where available so callers see what the processor
//! said, not a paraphrase.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{
    CreatePaymentIntentRequest, PaymentError, PaymentErrorCode, PaymentIntent, PaymentProvider,
};

use super::api_types::{StripeErrorEnvelope, StripePaymentIntent};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for the Stripe API (default: https://api.stripe.com).
    api_base_url: String,
}

impl StripeConfig {
    /// Create a new Stripe configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Set a custom API base URL (stub servers in tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Stripe payment provider adapter.
pub struct StripePaymentAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripePaymentAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Map a non-2xx Stripe response to a `PaymentError`.
    ///
    /// Prefers the message inside Stripe's error envelope; falls back to
    /// the raw body when the envelope cannot be parsed.
    fn error_from_response(status: reqwest::StatusCode, body: &str) -> PaymentError {
        let code = match status.as_u16() {
            401 | 403 => PaymentErrorCode::AuthenticationError,
            429 => PaymentErrorCode::RateLimitExceeded,
            400 | 402 | 404 => PaymentErrorCode::InvalidRequest,
            _ => PaymentErrorCode::ProviderError,
        };

        match serde_json::from_str::<StripeErrorEnvelope>(body) {
            Ok(envelope) => {
                let message = envelope.error.message.unwrap_or_else(|| {
                    format!("Stripe API error (HTTP {})", status.as_u16())
                });
                let error = PaymentError::new(code, message);
                match envelope.error.code {
                    Some(provider_code) => error.with_provider_code(provider_code),
                    None => error,
                }
            }
            Err(_) => PaymentError::new(code, format!("Stripe API error: {}", body)),
        }
    }
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn create_payment_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        let url = format!("{}/v1/payment_intents", self.config.api_base_url);

        let mut params = vec![
            ("amount", request.amount.to_string()),
            ("currency", request.currency.clone()),
        ];

        if request.automatic_payment_methods {
            params.push(("automatic_payment_methods[enabled]", "true".to_string()));
        }

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PaymentError::network(format!("Stripe request timed out: {}", e))
                } else {
                    PaymentError::network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                error = %body,
                "Stripe create_payment_intent failed"
            );
            return Err(Self::error_from_response(status, &body));
        }

        let intent: StripePaymentIntent = response.json().await.map_err(|e| {
            PaymentError::provider(format!("Failed to parse Stripe response: {}", e))
        })?;

        let client_secret = intent.client_secret.ok_or_else(|| {
            PaymentError::provider("Stripe response missing client_secret")
        })?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret,
            amount: intent.amount,
            currency: intent.currency,
            status: intent.status,
            created: intent.created,
        })
    }
}
