//! Stripe wire types.
//!
//! Thin serde mappings for the pieces of the Stripe API surface this
//! adapter touches: the payment intent object and the error envelope
//! returned on non-2xx responses.

use serde::Deserialize;

/// Payment intent object returned by `POST /v1/payment_intents`.
///
/// Only the fields the relay consumes are mapped; everything else in the
/// response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StripePaymentIntent {
    pub id: String,

    /// Secret handed to the client to complete the payment. Present on
    /// server-side retrievals with the secret key.
    pub client_secret: Option<String>,

    pub amount: i64,

    pub currency: String,

    pub status: String,

    #[serde(default)]
    pub created: i64,
}

/// Error envelope returned by the Stripe API.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorEnvelope {
    pub error: StripeApiError,
}

/// Error detail within the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeApiError {
    /// Human-readable message aimed at the developer.
    #[serde(default)]
    pub message: Option<String>,

    /// Broad category, e.g. "invalid_request_error", "card_error".
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,

    /// Stable short code, e.g. "parameter_invalid_integer".
    #[serde(default)]
    pub code: Option<String>,
}
