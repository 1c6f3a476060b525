use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rate meaning "no discount".
pub const NO_DISCOUNT: f64 = 1.0;

/// Returns true when `rate` is a usable discount multiplier in `(0, 1]`.
pub fn is_valid_discount_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0 && rate <= 1.0
}

/// A server-configured preset top-up amount with its discount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountOption {
    /// Quota units offered by the preset
    pub value: f64,
    /// Multiplier applied to the preset's price, in `(0, 1]`
    pub discount_rate: f64,
}

impl AmountOption {
    pub fn new(value: f64, discount_rate: f64) -> Self {
        Self {
            value,
            discount_rate: if is_valid_discount_rate(discount_rate) {
                discount_rate
            } else {
                NO_DISCOUNT
            },
        }
    }

    pub fn has_discount(&self) -> bool {
        self.discount_rate < NO_DISCOUNT
    }
}

/// Discount rates keyed by preset amount.
///
/// The server sends the table as a JSON object whose keys are the preset
/// amounts written as strings (`{"100": 0.9}`). Only whole amounts can carry
/// a discount; entries with unparsable keys or rates outside `(0, 1]` are
/// dropped when the table is built.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct DiscountTable {
    rates: BTreeMap<u64, f64>,
}

impl DiscountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rate for an amount. Invalid rates are ignored.
    pub fn insert(&mut self, amount: u64, rate: f64) {
        if is_valid_discount_rate(rate) {
            self.rates.insert(amount, rate);
        }
    }

    /// Discount configured for exactly `amount`, if any.
    pub fn get(&self, amount: f64) -> Option<f64> {
        if !amount.is_finite() || amount < 0.0 || amount.fract() != 0.0 || amount > u64::MAX as f64 {
            return None;
        }
        self.rates.get(&(amount as u64)).copied()
    }

    /// Discount for `amount`, defaulting to no discount.
    pub fn rate_for(&self, amount: f64) -> f64 {
        self.get(amount).unwrap_or(NO_DISCOUNT)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<(u64, f64)> for DiscountTable {
    fn from_iter<I: IntoIterator<Item = (u64, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (amount, rate) in iter {
            table.insert(amount, rate);
        }
        table
    }
}

impl From<BTreeMap<String, Value>> for DiscountTable {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let mut table = Self::new();
        for (key, value) in raw {
            let Ok(amount) = key.trim().parse::<u64>() else {
                tracing::warn!("Ignoring discount entry with non-integer amount '{}'", key);
                continue;
            };
            let rate = match &value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            match rate {
                Some(rate) if is_valid_discount_rate(rate) => {
                    table.rates.insert(amount, rate);
                }
                _ => tracing::warn!("Ignoring invalid discount rate for amount {}: {}", amount, value),
            }
        }
        table
    }
}
