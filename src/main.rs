//! Payment intent relay server entrypoint.
//!
//! Startup sequence: load and validate configuration, initialize tracing,
//! build the Stripe adapter, assemble the router, serve until ctrl-c.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use payment_intent_relay::adapters::http::{payment_router, PaymentAppState};
use payment_intent_relay::adapters::stripe::{StripeConfig, StripePaymentAdapter};
use payment_intent_relay::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.server.log_level)
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if config.is_production() && config.payment.is_test_mode() {
        tracing::warn!("Stripe test mode key configured in production environment");
    }

    let mut stripe_config = StripeConfig::new(config.payment.stripe_api_key.clone());
    if let Some(base_url) = &config.payment.api_base_url {
        stripe_config = stripe_config.with_base_url(base_url.clone());
    }

    let state = PaymentAppState {
        payment_provider: Arc::new(StripePaymentAdapter::new(stripe_config)),
        currency: config.payment.currency.clone(),
    };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", payment_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors_layer(&config)),
        )
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, currency = %config.payment.currency, "payment intent relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// GET /healthz - liveness probe for the hosting platform.
async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<http::HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        // No origins configured: open CORS, matching the callable-function
        // hosting this replaces.
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install ctrl-c handler");
    }
}
