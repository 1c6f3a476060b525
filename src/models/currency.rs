use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Exchange rate assumed when the configured USD rate is missing or unusable.
pub const DEFAULT_USD_EXCHANGE_RATE: f64 = 7.0;

/// Multiplier assumed when a custom currency rate is missing or unusable.
pub const DEFAULT_CUSTOM_RATE: f64 = 1.0;

/// Display currency selected in the console's status settings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum CurrencyKind {
    #[default]
    Usd,
    Cny,
    Custom,
}

impl CurrencyKind {
    pub fn default_symbol(&self) -> &'static str {
        match self {
            CurrencyKind::Usd => "$",
            CurrencyKind::Cny => "¥",
            CurrencyKind::Custom => "¤",
        }
    }
}

/// Snapshot of the display-currency settings for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub kind: CurrencyKind,
    pub symbol: String,
    /// Custom currency units per USD (only used by `CUSTOM`)
    pub rate: f64,
    /// Settlement units per USD
    pub usd_exchange_rate: f64,
}

impl CurrencyConfig {
    pub fn usd(usd_exchange_rate: f64) -> Self {
        Self {
            kind: CurrencyKind::Usd,
            symbol: CurrencyKind::Usd.default_symbol().to_string(),
            rate: DEFAULT_CUSTOM_RATE,
            usd_exchange_rate,
        }
    }

    pub fn cny(usd_exchange_rate: f64) -> Self {
        Self {
            kind: CurrencyKind::Cny,
            symbol: CurrencyKind::Cny.default_symbol().to_string(),
            rate: DEFAULT_CUSTOM_RATE,
            usd_exchange_rate,
        }
    }

    pub fn custom(symbol: impl Into<String>, rate: f64, usd_exchange_rate: f64) -> Self {
        Self {
            kind: CurrencyKind::Custom,
            symbol: symbol.into(),
            rate,
            usd_exchange_rate,
        }
    }

    /// USD exchange rate, falling back to the default when zero, negative or
    /// not finite.
    pub fn effective_usd_rate(&self) -> f64 {
        if self.usd_exchange_rate.is_finite() && self.usd_exchange_rate > 0.0 {
            self.usd_exchange_rate
        } else {
            DEFAULT_USD_EXCHANGE_RATE
        }
    }

    /// Custom currency rate with the same fallback rules.
    pub fn effective_custom_rate(&self) -> f64 {
        if self.rate.is_finite() && self.rate > 0.0 {
            self.rate
        } else {
            DEFAULT_CUSTOM_RATE
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self::usd(DEFAULT_USD_EXCHANGE_RATE)
    }
}
