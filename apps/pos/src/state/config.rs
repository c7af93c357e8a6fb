//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TALLY_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tally_core::Money;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (displayed on receipts)
    pub store_name: String,

    /// Prefix for generated receipt numbers
    pub receipt_prefix: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Quick-cash button denominations, in minor units
    pub quick_cash: Vec<i64>,

    /// Enable audio cues
    pub sound_enabled: bool,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Tally POS"
    /// - Receipt prefix: "TALLY-POS"
    /// - Currency: rupiah-style, "Rp. " with dot grouping
    /// - Quick cash: 2k / 5k / 10k / 20k / 50k / 100k
    /// - Sounds: enabled
    fn default() -> Self {
        ConfigState {
            store_name: "Tally POS".to_string(),
            receipt_prefix: "TALLY-POS".to_string(),
            currency_symbol: "Rp. ".to_string(),
            quick_cash: vec![2_000, 5_000, 10_000, 20_000, 50_000, 100_000],
            sound_enabled: true,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TALLY_STORE_NAME`: Override store name
    /// - `TALLY_RECEIPT_PREFIX`: Override receipt number prefix
    /// - `TALLY_SOUND`: "0" disables audio cues
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("TALLY_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(prefix) = std::env::var("TALLY_RECEIPT_PREFIX") {
            config.receipt_prefix = prefix;
        }

        if let Ok(sound) = std::env::var("TALLY_SOUND") {
            config.sound_enabled = sound != "0";
        }

        config
    }

    /// Formats a minor-unit amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(10_000), "Rp. 10.000");
    /// ```
    pub fn format_currency(&self, minor: i64) -> String {
        format!("{}{}", self.currency_symbol, Money::from_minor(minor))
    }
}
