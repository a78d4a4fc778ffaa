//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Stripe)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Stripe secret API key
    pub stripe_api_key: String,

    /// Currency for created payment intents (ISO 4217, lowercase)
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Override for the Stripe API base URL (stub servers in tests)
    pub api_base_url: Option<String>,
}

impl PaymentConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_test_")
    }

    /// Check if using Stripe live mode
    pub fn is_live_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_live_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_API_KEY"));
        }

        // Verify key prefix for safety
        if !self.stripe_api_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }

        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ValidationError::InvalidCurrency);
        }

        if let Some(url) = &self.api_base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidApiBaseUrl);
            }
        }

        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            stripe_api_key: String::new(),
            currency: default_currency(),
            api_base_url: None,
        }
    }
}

fn default_currency() -> String {
    "myr".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_test_mode() {
        let config = PaymentConfig {
            stripe_api_key: "sk_test_xxx".to_string(),
            ..Default::default()
        };
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());
    }

    #[test]
    fn test_is_live_mode() {
        let config = PaymentConfig {
            stripe_api_key: "sk_live_xxx".to_string(),
            ..Default::default()
        };
        assert!(config.is_live_mode());
        assert!(!config.is_test_mode());
    }

    #[test]
    fn currency_defaults_to_myr() {
        assert_eq!(PaymentConfig::default().currency, "myr");
    }

    #[test]
    fn validation_missing_api_key() {
        let config = PaymentConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_invalid_api_key_prefix() {
        let config = PaymentConfig {
            stripe_api_key: "pk_test_xxx".to_string(), // Publishable key, not secret
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_bad_currency_codes() {
        for currency in ["MYR", "my", "ringgit", ""] {
            let config = PaymentConfig {
                stripe_api_key: "sk_test_xxx".to_string(),
                currency: currency.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {:?}", currency);
        }
    }

    #[test]
    fn validation_rejects_non_http_base_url() {
        let config = PaymentConfig {
            stripe_api_key: "sk_test_xxx".to_string(),
            api_base_url: Some("ftp://stripe.example.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_valid_config() {
        let config = PaymentConfig {
            stripe_api_key: "sk_test_abcd1234".to_string(),
            currency: "usd".to_string(),
            api_base_url: Some("http://localhost:12111".to_string()),
        };
        assert!(config.validate().is_ok());
    }
}
