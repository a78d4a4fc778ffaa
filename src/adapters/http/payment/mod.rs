//! HTTP adapter for the payment endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PaymentAppState;
pub use routes::{payment_router, payment_routes};
