//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` port against the Stripe REST API. The
//! only operation this service needs is payment intent creation.
//!
//! # Configuration
//!
//! The adapter takes its secret key and optional base URL override from
//! [`StripeConfig`], built from the application configuration at startup.
//! Secrets are handled via `secrecy::SecretString`.

mod api_types;
mod mock_payment_provider;
mod stripe_adapter;

pub use api_types::{StripeApiError, StripeErrorEnvelope, StripePaymentIntent};
pub use mock_payment_provider::MockPaymentProvider;
pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};
