//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ROYAL_*`)
//! 2. Defaults (this file)
//!
//! Read-only after startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use fragrance_core::{Money, DEFAULT_PRODUCT_IMAGE, LOW_STOCK_THRESHOLD};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the header
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Products at or below this stock are low-stock alerts
    pub low_stock_threshold: i64,

    /// How long a notice stays up, in milliseconds
    pub notice_ms: u64,

    /// Image for products added without one
    pub default_image: String,

    /// Override for the snapshot directory; `None` uses the platform dir
    pub data_dir: Option<PathBuf>,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Royal Fragrances".to_string(),
            currency_symbol: "$".to_string(),
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            notice_ms: 3000,
            default_image: DEFAULT_PRODUCT_IMAGE.to_string(),
            data_dir: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ROYAL_STORE_NAME`: Override store name
    /// - `ROYAL_LOW_STOCK_THRESHOLD`: Low-stock cutoff (e.g., "3")
    /// - `ROYAL_NOTICE_MS`: Notice dismiss interval in milliseconds
    /// - `ROYAL_DATA_PATH`: Directory for the saved data
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    /// Unparseable numbers are logged and the default kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("ROYAL_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(raw) = lookup("ROYAL_LOW_STOCK_THRESHOLD") {
            match raw.trim().parse::<i64>() {
                Ok(threshold) if threshold >= 0 => config.low_stock_threshold = threshold,
                _ => warn!(value = %raw, "Ignoring invalid ROYAL_LOW_STOCK_THRESHOLD"),
            }
        }

        if let Some(raw) = lookup("ROYAL_NOTICE_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.notice_ms = ms,
                Err(_) => warn!(value = %raw, "Ignoring invalid ROYAL_NOTICE_MS"),
            }
        }

        if let Some(path) = lookup("ROYAL_DATA_PATH").filter(|p| !p.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(path));
        }

        config
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ```rust
    /// use fragrance_core::Money;
    /// use fragrance_desktop_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(9998)), "$99.98");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.low_stock_threshold, 5);
        assert_eq!(config.notice_duration(), Duration::from_secs(3));
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("ROYAL_STORE_NAME", "Royal Annex"),
            ("ROYAL_LOW_STOCK_THRESHOLD", "2"),
            ("ROYAL_NOTICE_MS", "1500"),
            ("ROYAL_DATA_PATH", "/tmp/royal"),
        ]));

        assert_eq!(config.store_name, "Royal Annex");
        assert_eq!(config.low_stock_threshold, 2);
        assert_eq!(config.notice_ms, 1500);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/royal")));
    }

    #[test]
    fn test_invalid_numbers_keep_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("ROYAL_LOW_STOCK_THRESHOLD", "-1"),
            ("ROYAL_NOTICE_MS", "soon"),
            ("ROYAL_DATA_PATH", "  "),
        ]));

        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState {
            currency_symbol: "€".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(11550)), "€115.50");
        assert_eq!(config.format_currency(Money::zero()), "€0.00");
    }
}
