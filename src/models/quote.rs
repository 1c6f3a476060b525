use serde::Serialize;

use super::{CurrencyKind, NO_DISCOUNT};

/// Unit the backend charges in. Quote prices are always expressed in it;
/// display conversion happens later.
pub const SETTLEMENT_CURRENCY: CurrencyKind = CurrencyKind::Cny;

/// Price quote for one requested top-up amount. Derived on every input
/// change and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingQuote {
    pub requested_amount: f64,
    pub original_price: f64,
    pub discount_rate: f64,
    pub discounted_price: f64,
    pub savings: f64,
    pub currency: CurrencyKind,
}

impl PricingQuote {
    /// Quote returned for unusable input.
    pub fn zero(requested_amount: f64) -> Self {
        Self {
            requested_amount,
            original_price: 0.0,
            discount_rate: NO_DISCOUNT,
            discounted_price: 0.0,
            savings: 0.0,
            currency: SETTLEMENT_CURRENCY,
        }
    }

    /// A rate of exactly 1 is "no discount" and must not be shown as one.
    pub fn has_discount(&self) -> bool {
        self.discount_rate < NO_DISCOUNT
    }

    pub fn is_zero(&self) -> bool {
        self.original_price == 0.0
    }
}
