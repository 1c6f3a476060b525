use std::env;

use crate::models::{
    CurrencyConfig, CurrencyKind, DEFAULT_CUSTOM_RATE, DEFAULT_USD_EXCHANGE_RATE,
};
use crate::tokens::{DEFAULT_QUOTA_PER_UNIT, QuotaUnits};

/// Display and unit settings normally served by the console's status
/// endpoint, read from the environment for the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    pub quota_per_unit: f64,
    pub usd_exchange_rate: f64,
    pub display_currency: CurrencyKind,
    /// Symbol shown for the `CUSTOM` display currency
    pub custom_currency_symbol: String,
    /// Custom currency units per USD
    pub custom_currency_rate: f64,
    /// Settlement units per quota unit
    pub price_ratio: f64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let display_currency: CurrencyKind = env::var("DISPLAY_CURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            quota_per_unit: positive_var("QUOTA_PER_UNIT").unwrap_or(DEFAULT_QUOTA_PER_UNIT),
            usd_exchange_rate: positive_var("USD_EXCHANGE_RATE").unwrap_or(DEFAULT_USD_EXCHANGE_RATE),
            display_currency,
            custom_currency_symbol: env::var("CUSTOM_CURRENCY_SYMBOL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| CurrencyKind::Custom.default_symbol().to_string()),
            custom_currency_rate: positive_var("CUSTOM_CURRENCY_RATE").unwrap_or(DEFAULT_CUSTOM_RATE),
            price_ratio: positive_var("PRICE_RATIO").unwrap_or(1.0),
        }
    }

    /// Currency snapshot for `kind`, or for the configured display currency.
    pub fn currency(&self, kind: Option<CurrencyKind>) -> CurrencyConfig {
        match kind.unwrap_or(self.display_currency) {
            CurrencyKind::Usd => CurrencyConfig::usd(self.usd_exchange_rate),
            CurrencyKind::Cny => CurrencyConfig::cny(self.usd_exchange_rate),
            CurrencyKind::Custom => CurrencyConfig::custom(
                self.custom_currency_symbol.clone(),
                self.custom_currency_rate,
                self.usd_exchange_rate,
            ),
        }
    }

    pub fn quota_units(&self) -> QuotaUnits {
        QuotaUnits::new(self.quota_per_unit)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quota_per_unit: DEFAULT_QUOTA_PER_UNIT,
            usd_exchange_rate: DEFAULT_USD_EXCHANGE_RATE,
            display_currency: CurrencyKind::Usd,
            custom_currency_symbol: CurrencyKind::Custom.default_symbol().to_string(),
            custom_currency_rate: DEFAULT_CUSTOM_RATE,
            price_ratio: 1.0,
        }
    }
}

/// A positive, finite number from the environment. Anything else reads as unset.
fn positive_var(key: &str) -> Option<f64> {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}
