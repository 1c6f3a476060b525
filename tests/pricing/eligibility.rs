use quota_pricing::is_pay_method_eligible;
use quota_pricing::models::{PayMethod, PayMethodKind};
use quota_pricing::payments::{Availability, DisabledReason, methods_with_availability};

use crate::common::*;

#[test]
fn test_stripe_disabled_regardless_of_amount() {
    let stripe = stripe_method(0.0);
    for amount in [0.0, 1.0, 1_000_000.0] {
        assert!(!is_pay_method_eligible(&stripe, amount, &flags(true, false)));
    }
}

#[test]
fn test_minimum_boundary() {
    let alipay = alipay_method(100.0);
    let on = flags(true, false);
    assert!(!is_pay_method_eligible(&alipay, 99.99, &on));
    assert!(is_pay_method_eligible(&alipay, 100.0, &on));
    assert!(is_pay_method_eligible(&alipay, 100.01, &on));
}

#[test]
fn test_stripe_below_minimum() {
    let stripe = stripe_method(100.0);
    assert!(!is_pay_method_eligible(&stripe, 50.0, &flags(false, true)));
    assert!(is_pay_method_eligible(&stripe, 100.0, &flags(false, true)));
}

#[test]
fn test_zero_minimum_means_no_minimum() {
    let wxpay = PayMethod::new(PayMethodKind::Wxpay, "WeChat", 0.0);
    assert!(is_pay_method_eligible(&wxpay, 0.5, &flags(true, false)));
}

#[test]
fn test_other_gateways_follow_online_flag() {
    let usdt = PayMethod::new(PayMethodKind::Other("usdt".into()), "USDT", 0.0);
    assert!(is_pay_method_eligible(&usdt, 10.0, &flags(true, false)));
    assert!(!is_pay_method_eligible(&usdt, 10.0, &flags(false, true)));
}

#[test]
fn test_availability_reasons_in_order() {
    let methods = vec![alipay_method(50.0), stripe_method(0.0)];
    let listed = methods_with_availability(&methods, 20.0, &flags(true, false));
    assert_eq!(listed[0].0.name, "Alipay");
    assert_eq!(
        listed[0].1,
        Availability::Disabled(DisabledReason::BelowMinimum { min_topup: 50.0 })
    );
    assert_eq!(listed[1].1, Availability::Disabled(DisabledReason::FeatureDisabled));
}
