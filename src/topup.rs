//! Validation of the top-up info payload.
//!
//! The server describes the top-up page with a loosely typed JSON blob: pay
//! methods may arrive as an array or as a JSON-encoded string, minimums may
//! be numbers or strings, and the Creem product list is always a string.
//! Everything is normalized here so the calculator only sees typed values.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{AmountOption, CreemProduct, DiscountTable, PayMethod, PayMethodKind, RawPayMethod};
use crate::payments::FeatureFlags;
use crate::presets::{generate_preset_amounts, presets_from_options};

/// Minimum used when no channel supplies one.
pub const FALLBACK_MIN_TOPUP: f64 = 1.0;

/// Top-up info exactly as the server sends it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTopupInfo {
    #[serde(default)]
    pub amount_options: Option<Vec<f64>>,
    #[serde(default)]
    pub discount: Option<DiscountTable>,
    #[serde(default)]
    pub pay_methods: Option<Value>,
    #[serde(default)]
    pub min_topup: Option<Value>,
    #[serde(default)]
    pub stripe_min_topup: Option<Value>,
    #[serde(default)]
    pub enable_online_topup: Option<bool>,
    #[serde(default)]
    pub enable_stripe_topup: Option<bool>,
    #[serde(default)]
    pub enable_creem_topup: Option<bool>,
    #[serde(default)]
    pub creem_products: Option<String>,
    /// Price ratio (settlement units per quota unit)
    #[serde(default)]
    pub price: Option<f64>,
}

/// Validated top-up configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TopupConfig {
    pub flags: FeatureFlags,
    pub pay_methods: Vec<PayMethod>,
    pub discounts: DiscountTable,
    pub presets: Vec<AmountOption>,
    /// Minimum of the active amount-based channel
    pub min_topup: f64,
    pub price_ratio: f64,
    pub creem_products: Vec<CreemProduct>,
}

impl TopupConfig {
    pub fn from_json(payload: &str) -> Result<Self> {
        let raw: RawTopupInfo = serde_json::from_str(payload)?;
        Self::from_raw(raw)
    }

    /// Load a saved top-up info payload.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let payload = std::fs::read_to_string(path)?;
        Self::from_json(&payload)
    }

    pub fn from_raw(raw: RawTopupInfo) -> Result<Self> {
        let flags = FeatureFlags {
            online_topup_enabled: raw.enable_online_topup.unwrap_or(false),
            stripe_enabled: raw.enable_stripe_topup.unwrap_or(false),
            creem_enabled: raw.enable_creem_topup.unwrap_or(false),
        };

        let stripe_min = number_from(raw.stripe_min_topup.as_ref());
        let pay_methods = normalize_pay_methods(raw.pay_methods.as_ref(), stripe_min)?;
        let min_topup = resolve_min_topup(&flags, number_from(raw.min_topup.as_ref()), stripe_min);

        let discounts = raw.discount.unwrap_or_default();
        let amount_options = raw.amount_options.unwrap_or_default();
        let presets = if amount_options.is_empty() {
            generate_preset_amounts(min_topup)
        } else {
            presets_from_options(&amount_options, &discounts)
        };

        let price_ratio = raw
            .price
            .filter(|p| p.is_finite() && *p > 0.0)
            .unwrap_or(1.0);

        Ok(Self {
            flags,
            pay_methods,
            discounts,
            presets,
            min_topup,
            price_ratio,
            creem_products: parse_creem_products(raw.creem_products.as_deref()),
        })
    }

    pub fn find_method(&self, kind: &PayMethodKind) -> Option<&PayMethod> {
        self.pay_methods.iter().find(|m| &m.kind == kind)
    }
}

/// Active minimum: the online minimum when online top-up is on, else the
/// Stripe minimum when Stripe is on, else 1.
pub fn resolve_min_topup(flags: &FeatureFlags, min_topup: Option<f64>, stripe_min_topup: Option<f64>) -> f64 {
    let chosen = if flags.online_topup_enabled {
        min_topup
    } else if flags.stripe_enabled {
        stripe_min_topup
    } else {
        Some(FALLBACK_MIN_TOPUP)
    };
    chosen
        .filter(|v| *v > 0.0)
        .unwrap_or(FALLBACK_MIN_TOPUP)
}

/// Validate the pay method list. Entries that are not objects or lack a
/// string `name` or `type` are dropped; a value that is neither an array nor
/// a JSON string holding one is an error.
pub fn normalize_pay_methods(value: Option<&Value>, stripe_min_topup: Option<f64>) -> Result<Vec<PayMethod>> {
    let entries: Vec<Value> = match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) if s.trim().is_empty() => Vec::new(),
        Some(Value::String(s)) => serde_json::from_str(s)
            .map_err(|e| AppError::InvalidPayload(format!("pay_methods is not a JSON array: {}", e)))?,
        Some(Value::Array(items)) => items.clone(),
        Some(other) => {
            return Err(AppError::InvalidPayload(format!(
                "pay_methods must be an array, got {}",
                other
            )));
        }
    };

    let methods = entries
        .iter()
        .filter_map(|entry| {
            let Some(m) = RawPayMethod::from_entry(entry) else {
                tracing::warn!("Dropping pay method that is not an object: {}", entry);
                return None;
            };
            let name = m.name.as_deref().map(str::trim).filter(|s| !s.is_empty());
            let kind = m.kind.as_deref().map(str::trim).filter(|s| !s.is_empty());
            let (Some(name), Some(kind)) = (name, kind) else {
                tracing::warn!("Dropping pay method without name or type: {}", entry);
                return None;
            };

            let kind = PayMethodKind::parse(kind);
            let min_topup = match stripe_min_topup {
                // Stripe's minimum lives in its own field when unset here
                Some(stripe_min) if kind.is_stripe() && m.normalized_min_topup() <= 0.0 => stripe_min,
                _ => m.normalized_min_topup(),
            };
            let color = m
                .color
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| kind.default_color())
                .to_string();

            Some(PayMethod {
                kind,
                name: name.to_string(),
                min_topup,
                color,
            })
        })
        .collect();

    Ok(methods)
}

/// Parse the Creem product list. An unparsable list disables the section
/// instead of failing the whole page.
pub fn parse_creem_products(raw: Option<&str>) -> Vec<CreemProduct> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<CreemProduct>>(raw) {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!("Failed to parse creem products: {}", e);
            Vec::new()
        }
    }
}

fn number_from(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|v| v.is_finite())
}
