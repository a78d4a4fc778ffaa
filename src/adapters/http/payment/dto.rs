//! HTTP DTOs (Data Transfer Objects) for the payment endpoints.
//!
//! These types define the JSON request/response structure of the relay's
//! invocation boundary.

use serde::{Deserialize, Serialize};

/// Request to create a payment intent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIntentRequest {
    /// Amount in minor currency units (e.g. sen). Forwarded to the
    /// processor without validation.
    pub amount: i64,
}

/// Response for intent creation.
///
/// Exactly one of the two variants is ever produced: the client secret on
/// success, or the processor's error message on failure. Failures share
/// the success status code; callers branch on the body shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum IntentResponse {
    /// Intent created; the client completes the payment with the secret.
    Completed {
        #[serde(rename = "clientSecret")]
        client_secret: String,
    },

    /// The processor call failed; the message is relayed as-is.
    Failed { error: String },
}
