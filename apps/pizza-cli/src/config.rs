//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PIZZA_*`, `RUST_LOG` for logging)
//! 2. Defaults (this file)
//!
//! ## Environment Variables
//! - `PIZZA_CATALOG`: path to a JSON catalog replacing the standard menu
//! - `PIZZA_CURRENCY_SYMBOL`: symbol used when printing prices (default `$`)
//! - `PIZZA_LOG`: log filter used when `RUST_LOG` is unset
//!
//! Configuration is read-only after initialization.

use std::borrow::Cow;
use std::path::PathBuf;

use pizza_core::{Catalog, CoreError, Money};
use serde::Serialize;
use tracing::info;

/// Default log filter.
pub const DEFAULT_LOG_FILTER: &str = "warn,pizza_cli=info,pizza_core=info";

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Replacement catalog file, if any.
    pub catalog_path: Option<PathBuf>,

    /// Currency symbol for display.
    pub currency_symbol: String,

    /// Fallback `tracing` filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_path: None,
            currency_symbol: "$".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("PIZZA_CATALOG") {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue("PIZZA_CATALOG".to_string()));
            }
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(symbol) = lookup("PIZZA_CURRENCY_SYMBOL") {
            if symbol.is_empty() || symbol.chars().count() > 3 {
                return Err(ConfigError::InvalidValue("PIZZA_CURRENCY_SYMBOL".to_string()));
            }
            config.currency_symbol = symbol;
        }

        if let Some(filter) = lookup("PIZZA_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// The catalog to price against: the standard menu, or the configured
    /// file after validation.
    pub fn load_catalog(&self) -> Result<Cow<'static, Catalog>, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Cow::Borrowed(Catalog::standard()));
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
            path: path.clone(),
            source,
        })?;
        let catalog: Catalog = serde_json::from_str(&raw).map_err(|source| ConfigError::CatalogParse {
            path: path.clone(),
            source,
        })?;
        catalog.validate()?;

        info!(path = %path.display(), toppings = catalog.toppings().len(), "custom catalog loaded");
        Ok(Cow::Owned(catalog))
    }

    /// Formats a price with the configured symbol.
    ///
    /// ```rust
    /// use pizza_cli::config::AppConfig;
    /// use pizza_core::Money;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1045)), "$10.45");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.abs().to_plain_string()
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Cannot read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot parse catalog {}: {source}", .path.display())]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] CoreError),
}
