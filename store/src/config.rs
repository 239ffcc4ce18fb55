//! # Application configuration
//!
//! Build-time configuration for the web client. Values come from
//! environment variables read at compile time (there is no runtime
//! environment in the browser), falling back to production defaults:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `FINWATCH_API_URL` | `api_base_url` | `/api/v1` |
//! | `FINWATCH_CURRENCY` | `currency_code` | `EUR` |
//! | `FINWATCH_CURRENCY_SYMBOL` | `currency_symbol` | `€` |
//!
//! The display name and version always come from the crate metadata.

use serde::{Deserialize, Serialize};

/// Configuration consumed by the API client and the views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base path prefixed to every REST call.
    pub api_base_url: String,
    pub app_name: String,
    pub app_version: String,
    /// ISO 4217 code used when submitting amounts.
    pub currency_code: String,
    /// Symbol used when rendering amounts.
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("FINWATCH_API_URL")
                .unwrap_or("/api/v1")
                .to_string(),
            app_name: "Finwatch".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_code: option_env!("FINWATCH_CURRENCY")
                .unwrap_or("EUR")
                .to_string(),
            currency_symbol: option_env!("FINWATCH_CURRENCY_SYMBOL")
                .unwrap_or("€")
                .to_string(),
        }
    }
}

impl AppConfig {
    /// Builder method to override the API base URL (used by tests).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert!(!config.api_base_url.is_empty());
        assert_eq!(config.app_name, "Finwatch");
        assert_eq!(config.currency_code.len(), 3);
    }

    #[test]
    fn builder_overrides_base_url() {
        let config = AppConfig::default().with_api_base_url("http://localhost:8000/api/v1");
        assert_eq!(config.api_base_url, "http://localhost:8000/api/v1");
    }
}
