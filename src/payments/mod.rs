mod charge;
mod eligibility;

pub use charge::*;
pub use eligibility::*;

use serde::{Deserialize, Serialize};

/// Administrator switches that gate the payment channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default, rename = "enable_online_topup")]
    pub online_topup_enabled: bool,
    #[serde(default, rename = "enable_stripe_topup")]
    pub stripe_enabled: bool,
    #[serde(default, rename = "enable_creem_topup")]
    pub creem_enabled: bool,
}

impl FeatureFlags {
    /// Whether any amount-based channel (online gateways or Stripe) is on.
    pub fn amount_topup_enabled(&self) -> bool {
        self.online_topup_enabled || self.stripe_enabled
    }
}
