//! Display-currency conversion.
//!
//! Amounts are computed in their canonical unit and converted once, at the
//! last step before they are shown. Preset values and model prices are
//! USD-denominated; quote prices are in the settlement unit.

use serde::{Deserialize, Serialize};

use crate::models::{CurrencyConfig, CurrencyKind, ModelListItem, ModelPriceType};

/// Convert a USD-denominated amount into the display currency.
pub fn convert_for_display(amount: f64, currency: &CurrencyConfig) -> f64 {
    DisplayRates::snapshot(currency).usd(amount)
}

/// Conversion factors captured once per render pass, so that related
/// figures (price, savings, value) never mix rate snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRates {
    pub kind: CurrencyKind,
    pub symbol: String,
    usd_factor: f64,
    settlement_factor: f64,
}

impl DisplayRates {
    pub fn snapshot(currency: &CurrencyConfig) -> Self {
        let usd_rate = currency.effective_usd_rate();
        let (usd_factor, settlement_factor) = match currency.kind {
            CurrencyKind::Usd => (1.0, 1.0 / usd_rate),
            CurrencyKind::Cny => (usd_rate, 1.0),
            CurrencyKind::Custom => {
                let rate = currency.effective_custom_rate();
                (rate, rate / usd_rate)
            }
        };
        Self {
            kind: currency.kind,
            symbol: currency.symbol.clone(),
            usd_factor,
            settlement_factor,
        }
    }

    /// Display value of a USD-denominated amount.
    pub fn usd(&self, amount: f64) -> f64 {
        amount * self.usd_factor
    }

    /// Display value of an amount in the settlement unit.
    pub fn settlement(&self, amount: f64) -> f64 {
        amount * self.settlement_factor
    }

    pub fn format(&self, amount: f64) -> String {
        format_money(&self.symbol, amount)
    }
}

/// `symbol` followed by `amount` rounded to two decimals.
pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Exchange-rate hint shown above the preset grid for non-USD currencies.
pub fn exchange_rate_banner(currency: &CurrencyConfig) -> Option<String> {
    let rate = match currency.kind {
        CurrencyKind::Usd => return None,
        CurrencyKind::Cny => currency.effective_usd_rate(),
        CurrencyKind::Custom => currency.effective_custom_rate(),
    };
    Some(format!("(1 $ = {:.2} {})", rate, currency.symbol))
}

/// Currency toggle of the public model price list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelPriceCurrency {
    #[default]
    Usd,
    Cny,
}

/// Format a per-million-token model price, `-` when unpriced.
pub fn format_model_price(price: Option<f64>, currency: ModelPriceCurrency, exchange_rate: f64) -> String {
    let Some(price) = price.filter(|p| p.is_finite() && *p != 0.0) else {
        return "-".to_string();
    };
    match currency {
        ModelPriceCurrency::Usd => format!("${:.2}/M", price),
        ModelPriceCurrency::Cny => {
            let rate = if exchange_rate.is_finite() && exchange_rate > 0.0 {
                exchange_rate
            } else {
                crate::models::DEFAULT_USD_EXCHANGE_RATE
            };
            format!("¥{:.2}/M", price * rate)
        }
    }
}

/// Formatted input and output price of a model list row.
pub fn model_price_cells(
    item: &ModelListItem,
    price_type: ModelPriceType,
    currency: ModelPriceCurrency,
    exchange_rate: f64,
) -> (String, String) {
    let (input, output) = item.prices(price_type);
    (
        format_model_price(input, currency, exchange_rate),
        format_model_price(output, currency, exchange_rate),
    )
}
