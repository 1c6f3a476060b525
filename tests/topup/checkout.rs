use serde_json::json;

use quota_pricing::compute_quote;
use quota_pricing::error::AppError;
use quota_pricing::models::{CurrencyConfig, PayMethodKind};
use quota_pricing::payments::{ChargeRequest, CreemCharge, ensure_payment_enabled, is_pay_method_eligible};
use quota_pricing::presets::PresetCard;
use quota_pricing::topup::TopupConfig;

use crate::common::*;

fn sample_config() -> TopupConfig {
    TopupConfig::from_json(&sample_topup_info().to_string()).unwrap()
}

#[test]
fn test_charge_carries_base_amount_not_display_value() {
    let config = sample_config();
    let preset = config.presets[2];
    let cny = CurrencyConfig::cny(7.0);
    let card = PresetCard::render(&preset, config.price_ratio, &cny);
    assert_eq!(card.display_value, 700.0);

    let charge = ChargeRequest::new(PayMethodKind::Alipay, card.amount, config.min_topup).unwrap();
    assert_eq!(
        serde_json::to_value(&charge).unwrap(),
        json!({"amount": 100.0, "payment_method": "alipay"})
    );
}

#[test]
fn test_selected_preset_flow() {
    let config = sample_config();
    let amount = 100.0;

    let quote = compute_quote(amount, config.price_ratio, &config.discounts);
    assert!(quote.has_discount());
    assert_eq!(quote.discounted_price, 100.0 * 7.3 * 0.9);

    let stripe = config.find_method(&PayMethodKind::Stripe).unwrap();
    assert!(is_pay_method_eligible(stripe, amount, &config.flags));
    ensure_payment_enabled(&stripe.kind, &config.flags).unwrap();

    let charge = ChargeRequest::new(stripe.kind.clone(), amount, config.min_topup).unwrap();
    assert_eq!(charge.route(), "/api/user/stripe/pay");
}

#[test]
fn test_below_active_minimum_is_rejected() {
    let config = sample_config();
    let err = ChargeRequest::new(PayMethodKind::Wxpay, 5.0, config.min_topup).unwrap_err();
    assert!(matches!(
        err,
        AppError::BelowMinimum { requested, min_topup } if requested == 5.0 && min_topup == 10.0
    ));
}

#[test]
fn test_creem_disabled_in_sample() {
    let config = sample_config();
    let err = CreemCharge::new(&config.creem_products[0], &config.flags).unwrap_err();
    assert_eq!(err.code(), "PAYMENT_DISABLED");
}
