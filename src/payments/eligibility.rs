use crate::error::{AppError, Result};
use crate::models::{PayMethod, PayMethodKind};

use super::FeatureFlags;

/// Why a pay method cannot be used for the requested amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisabledReason {
    /// The channel's feature flag is off
    FeatureDisabled,
    /// The amount is below the method's minimum top-up
    BelowMinimum { min_topup: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Availability {
    Available,
    Disabled(DisabledReason),
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// Whether the channel behind an amount-based pay method is switched on.
///
/// Stripe gates on its own flag; every other gateway listed in the pay
/// methods shares the online top-up flag. Creem products are bought through
/// their own flow and gated by [`super::CreemCharge`].
pub fn channel_enabled(kind: &PayMethodKind, flags: &FeatureFlags) -> bool {
    match kind {
        PayMethodKind::Stripe => flags.stripe_enabled,
        _ => flags.online_topup_enabled,
    }
}

/// Availability of `method` for `requested_amount`, with the reason when it
/// cannot be used. A flag that is off wins over a minimum that is not met.
pub fn method_availability(method: &PayMethod, requested_amount: f64, flags: &FeatureFlags) -> Availability {
    if !channel_enabled(&method.kind, flags) {
        return Availability::Disabled(DisabledReason::FeatureDisabled);
    }
    // NaN amounts never meet a minimum
    let meets_minimum = requested_amount >= method.min_topup;
    if method.min_topup > 0.0 && !meets_minimum {
        return Availability::Disabled(DisabledReason::BelowMinimum {
            min_topup: method.min_topup,
        });
    }
    Availability::Available
}

/// True iff the method's channel is enabled and the amount meets its minimum.
pub fn is_pay_method_eligible(method: &PayMethod, requested_amount: f64, flags: &FeatureFlags) -> bool {
    method_availability(method, requested_amount, flags).is_available()
}

/// Pair every method with its availability, preserving server order.
pub fn methods_with_availability<'a>(
    methods: &'a [PayMethod],
    requested_amount: f64,
    flags: &FeatureFlags,
) -> Vec<(&'a PayMethod, Availability)> {
    methods
        .iter()
        .map(|m| (m, method_availability(m, requested_amount, flags)))
        .collect()
}

/// Gate checked before the confirmation step is opened.
pub fn ensure_payment_enabled(kind: &PayMethodKind, flags: &FeatureFlags) -> Result<()> {
    if channel_enabled(kind, flags) {
        Ok(())
    } else {
        Err(AppError::PaymentDisabled(kind.to_string()))
    }
}
