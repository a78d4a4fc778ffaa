//! Payment provider port for external payment processing.
//!
//! Defines the contract for the payment processor integration (e.g. Stripe).
//! The relay performs exactly one operation against the processor: creating
//! a payment intent and reading back its client secret.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a payment intent with the processor.
    ///
    /// The amount is forwarded exactly as given; the processor decides
    /// whether it is acceptable. Returns the created intent including its
    /// client secret.
    async fn create_payment_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError>;
}

/// Request to create a payment intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Amount in the smallest unit of the currency (e.g. cents or sen).
    /// Passed through unvalidated.
    pub amount: i64,

    /// ISO 4217 currency code, lowercase.
    pub currency: String,

    /// Ask the processor to select eligible payment methods automatically.
    pub automatic_payment_methods: bool,
}

/// Payment intent created by the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Provider's intent ID.
    pub id: String,

    /// Opaque token the client uses to complete the payment.
    pub client_secret: String,

    /// Amount as echoed by the provider.
    pub amount: i64,

    /// Currency as echoed by the provider.
    pub currency: String,

    /// Provider-side intent status (e.g. "requires_payment_method").
    pub status: String,

    /// When the intent was created (provider Unix timestamp).
    pub created: i64,
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message, preserving the provider's wording where
    /// available.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
            retryable: code.is_retryable(),
        }
    }

    /// Attach the provider's own error code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationError, message)
    }

    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::InvalidRequest, message)
    }

    /// Create a rate limit error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::RateLimitExceeded, message)
    }

    /// Create a generic provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network connectivity issue, including timeouts.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// The processor rejected the request parameters.
    InvalidRequest,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,
}

impl PaymentErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentErrorCode::NetworkError | PaymentErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::InvalidRequest => "invalid_request",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn payment_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn PaymentProvider) {}
    }

    #[test]
    fn payment_error_retryable() {
        assert!(PaymentErrorCode::NetworkError.is_retryable());
        assert!(PaymentErrorCode::RateLimitExceeded.is_retryable());

        assert!(!PaymentErrorCode::InvalidRequest.is_retryable());
        assert!(!PaymentErrorCode::AuthenticationError.is_retryable());
        assert!(!PaymentErrorCode::ProviderError.is_retryable());
    }

    #[test]
    fn payment_error_display() {
        let err = PaymentError::invalid_request("Amount must convert to at least 2 sen");
        assert!(err.to_string().contains("invalid_request"));
        assert!(err.to_string().contains("at least 2 sen"));
    }

    #[test]
    fn payment_error_carries_provider_code() {
        let err = PaymentError::invalid_request("Invalid positive integer")
            .with_provider_code("parameter_invalid_integer");
        assert_eq!(
            err.provider_code.as_deref(),
            Some("parameter_invalid_integer")
        );
        assert!(!err.retryable);
    }

    #[test]
    fn constructors_set_matching_codes() {
        assert_eq!(
            PaymentError::network("x").code,
            PaymentErrorCode::NetworkError
        );
        assert_eq!(
            PaymentError::authentication("x").code,
            PaymentErrorCode::AuthenticationError
        );
        assert_eq!(
            PaymentError::rate_limited("x").code,
            PaymentErrorCode::RateLimitExceeded
        );
        assert_eq!(
            PaymentError::provider("x").code,
            PaymentErrorCode::ProviderError
        );
    }
}
