use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{CreemProduct, PayMethodKind};

use super::FeatureFlags;

const PAY_ROUTE: &str = "/api/user/pay";
const STRIPE_PAY_ROUTE: &str = "/api/user/stripe/pay";
const CREEM_PAY_ROUTE: &str = "/api/user/creem/pay";

/// Body of an amount-based payment request.
///
/// `amount` is the requested quota amount in the backend's own unit, exactly
/// as entered. It is never the display-currency figure and never truncated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeRequest {
    pub amount: f64,
    pub payment_method: PayMethodKind,
}

impl ChargeRequest {
    /// Build a charge for `requested_amount`, enforcing the active minimum.
    pub fn new(payment_method: PayMethodKind, requested_amount: f64, min_topup: f64) -> Result<Self> {
        if !requested_amount.is_finite() || requested_amount <= 0.0 {
            return Err(AppError::BadRequest(format!(
                "Top-up amount must be a positive number, got {}",
                requested_amount
            )));
        }
        if requested_amount < min_topup {
            return Err(AppError::BelowMinimum {
                requested: requested_amount,
                min_topup,
            });
        }
        Ok(Self {
            amount: requested_amount,
            payment_method,
        })
    }

    /// Backend route the request is posted to.
    pub fn route(&self) -> &'static str {
        match self.payment_method {
            PayMethodKind::Stripe => STRIPE_PAY_ROUTE,
            PayMethodKind::Creem => CREEM_PAY_ROUTE,
            _ => PAY_ROUTE,
        }
    }
}

/// Body of a Creem product purchase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreemCharge {
    pub product_id: String,
    pub payment_method: PayMethodKind,
}

impl CreemCharge {
    pub fn new(product: &CreemProduct, flags: &FeatureFlags) -> Result<Self> {
        if !flags.creem_enabled {
            return Err(AppError::PaymentDisabled(PayMethodKind::Creem.to_string()));
        }
        if product.product_id.trim().is_empty() {
            return Err(AppError::BadRequest(format!(
                "Creem product '{}' has no product id configured",
                product.name
            )));
        }
        Ok(Self {
            product_id: product.product_id.clone(),
            payment_method: PayMethodKind::Creem,
        })
    }

    pub fn route(&self) -> &'static str {
        CREEM_PAY_ROUTE
    }
}
