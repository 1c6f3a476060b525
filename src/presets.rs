//! Preset top-up amounts and the figures shown on each preset card.

use serde::Serialize;

use crate::currency::DisplayRates;
use crate::models::{AmountOption, CurrencyConfig, DiscountTable, NO_DISCOUNT};
use crate::pricing::quote_at_rate;

/// Multiples of the minimum top-up offered when the server configures no
/// amount options.
pub const PRESET_MULTIPLIERS: [u32; 8] = [1, 5, 10, 30, 50, 100, 300, 500];

pub fn generate_preset_amounts(min_topup: f64) -> Vec<AmountOption> {
    PRESET_MULTIPLIERS
        .iter()
        .map(|m| AmountOption::new(min_topup * f64::from(*m), NO_DISCOUNT))
        .collect()
}

/// Server-configured amount options paired with their discounts.
pub fn presets_from_options(options: &[f64], discounts: &DiscountTable) -> Vec<AmountOption> {
    options
        .iter()
        .map(|value| AmountOption::new(*value, discounts.rate_for(*value)))
        .collect()
}

/// Display figures for one preset card, all taken from a single rate
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetCard {
    /// Preset amount as the user selects it (backend unit)
    pub amount: f64,
    pub display_value: f64,
    pub actual_pay: f64,
    pub savings: f64,
    pub discount_rate: f64,
    pub has_discount: bool,
    pub symbol: String,
}

impl PresetCard {
    pub fn render(preset: &AmountOption, price_ratio: f64, currency: &CurrencyConfig) -> Self {
        Self::render_with(preset, price_ratio, &DisplayRates::snapshot(currency))
    }

    /// Render against a snapshot shared by the whole preset grid.
    pub fn render_with(preset: &AmountOption, price_ratio: f64, rates: &DisplayRates) -> Self {
        let quote = quote_at_rate(preset.value, price_ratio, preset.discount_rate);
        Self {
            amount: preset.value,
            display_value: rates.usd(preset.value),
            actual_pay: rates.settlement(quote.discounted_price),
            savings: rates.settlement(quote.savings),
            discount_rate: quote.discount_rate,
            has_discount: quote.has_discount(),
            symbol: rates.symbol.clone(),
        }
    }

    /// "Pay ¥90.00" style line, with the savings appended when discounted.
    pub fn price_line(&self) -> String {
        let pay = format!("{}{:.2}", self.symbol, self.actual_pay);
        if self.has_discount {
            format!("{} (save {}{:.2})", pay, self.symbol, self.savings)
        } else {
            pay
        }
    }
}

/// Render the whole grid against one snapshot.
pub fn render_preset_grid(presets: &[AmountOption], price_ratio: f64, currency: &CurrencyConfig) -> Vec<PresetCard> {
    let rates = DisplayRates::snapshot(currency);
    presets
        .iter()
        .map(|p| PresetCard::render_with(p, price_ratio, &rates))
        .collect()
}
