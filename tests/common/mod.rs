//! Shared fixtures for integration tests.
#![allow(dead_code)]

use serde_json::{Value, json};

use quota_pricing::models::{PayMethod, PayMethodKind};
use quota_pricing::payments::FeatureFlags;

pub fn flags(online: bool, stripe: bool) -> FeatureFlags {
    FeatureFlags {
        online_topup_enabled: online,
        stripe_enabled: stripe,
        creem_enabled: false,
    }
}

pub fn stripe_method(min_topup: f64) -> PayMethod {
    PayMethod::new(PayMethodKind::Stripe, "Stripe", min_topup)
}

pub fn alipay_method(min_topup: f64) -> PayMethod {
    PayMethod::new(PayMethodKind::Alipay, "Alipay", min_topup)
}

/// Top-up info payload shaped like the server's response, including the
/// malformed entries it is known to send.
pub fn sample_topup_info() -> Value {
    json!({
        "amount_options": [10, 50, 100],
        "discount": {"100": 0.9, "50": "0.95"},
        "pay_methods": "[{\"name\":\"Alipay\",\"type\":\"alipay\",\"min_topup\":\"5\"},{\"name\":\"WeChat\",\"type\":\"wxpay\",\"color\":\"#07C160\"},{\"name\":\"Stripe\",\"type\":\"stripe\"},{\"type\":\"usdt\"},{\"name\":\"Broken\"}]",
        "min_topup": 10,
        "stripe_min_topup": "20",
        "enable_online_topup": true,
        "enable_stripe_topup": true,
        "enable_creem_topup": false,
        "creem_products": "[{\"name\":\"Starter\",\"productId\":\"prod_1\",\"price\":4.99,\"quota\":500000,\"currency\":\"EUR\"}]",
        "price": 7.3
    })
}
