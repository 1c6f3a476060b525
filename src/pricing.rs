//! Top-up price calculation.
//!
//! Everything here is pure arithmetic over values the caller passes in:
//! no configuration is read from ambient state, and nothing is rounded
//! before display. Invalid input yields a zero quote instead of an error
//! because these functions run on every amount or currency change.

use serde::Serialize;

use crate::models::{DiscountTable, NO_DISCOUNT, PricingQuote, SETTLEMENT_CURRENCY, is_valid_discount_rate};

/// Compute the price quote for `base_amount` quota units.
///
/// `original_price = base_amount * price_ratio`, the discount comes from
/// `discounts` (defaulting to 1.0), and `savings` is the exact difference
/// between the original and discounted prices.
pub fn compute_quote(base_amount: f64, price_ratio: f64, discounts: &DiscountTable) -> PricingQuote {
    quote_at_rate(base_amount, price_ratio, discounts.rate_for(base_amount))
}

/// Same as [`compute_quote`] with the discount rate already looked up, as
/// for a preset that carries its own rate. Rates outside `(0, 1]` count as
/// no discount.
pub fn quote_at_rate(base_amount: f64, price_ratio: f64, discount_rate: f64) -> PricingQuote {
    if !is_positive(base_amount) || !is_positive(price_ratio) {
        return PricingQuote::zero(base_amount);
    }

    let discount_rate = if is_valid_discount_rate(discount_rate) {
        discount_rate
    } else {
        NO_DISCOUNT
    };
    let original_price = base_amount * price_ratio;
    let discounted_price = original_price * discount_rate;

    PricingQuote {
        requested_amount: base_amount,
        original_price,
        discount_rate,
        discounted_price,
        savings: original_price - discounted_price,
        currency: SETTLEMENT_CURRENCY,
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// How a discount badge is worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountLabelStyle {
    /// "10.0% off" locales: shows `(1 - rate) * 100`
    PercentOff,
    /// Tenths convention ("9.0 折"): shows `rate * 10`
    Tenths,
}

/// Badge number for a discount rate, or `None` when there is no discount.
pub fn discount_label(rate: f64, style: DiscountLabelStyle) -> Option<String> {
    if !is_valid_discount_rate(rate) || rate >= NO_DISCOUNT {
        return None;
    }
    let shown = match style {
        DiscountLabelStyle::PercentOff => (1.0 - rate) * 100.0,
        DiscountLabelStyle::Tenths => rate * 10.0,
    };
    Some(format!("{:.1}", shown))
}

/// Price breakdown for the purchase confirmation step.
///
/// Works backwards from the amount the backend says will be paid, since
/// that figure is authoritative once the user has picked an amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PurchaseSummary {
    pub paid: f64,
    pub discount_rate: f64,
    /// `None` when no discount applies
    pub original: Option<f64>,
    /// `None` when no discount applies
    pub discount: Option<f64>,
}

impl PurchaseSummary {
    pub fn from_paid(paid: f64, discount_rate: f64) -> Self {
        let applies = discount_rate > 0.0 && discount_rate < NO_DISCOUNT && paid > 0.0 && paid.is_finite();
        if !applies {
            return Self {
                paid,
                discount_rate,
                original: None,
                discount: None,
            };
        }
        let original = paid / discount_rate;
        Self {
            paid,
            discount_rate,
            original: Some(original),
            discount: Some(original - paid),
        }
    }

    pub fn has_discount(&self) -> bool {
        self.original.is_some()
    }

    /// Rounded percentage badge, e.g. 0.85 -> 85.
    pub fn percent_badge(&self) -> Option<i64> {
        self.has_discount()
            .then(|| (self.discount_rate * 100.0).round() as i64)
    }
}
