//! Payment Intent Relay - Stripe payment intent creation service
//!
//! This crate exposes one callable endpoint that forwards a payment amount
//! to Stripe, creates a payment intent in a fixed currency, and relays the
//! resulting client secret back to the caller.

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
