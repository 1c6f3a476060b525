use quota_pricing::compute_quote;
use quota_pricing::models::{DiscountTable, SETTLEMENT_CURRENCY};
use quota_pricing::pricing::{DiscountLabelStyle, PurchaseSummary, discount_label};

fn table(entries: &[(u64, f64)]) -> DiscountTable {
    entries.iter().copied().collect()
}

#[test]
fn test_discounted_preset() {
    let quote = compute_quote(100.0, 1.0, &table(&[(100, 0.9)]));
    assert_eq!(quote.original_price, 100.0);
    assert_eq!(quote.discounted_price, 90.0);
    assert_eq!(quote.savings, 10.0);
    assert_eq!(quote.discount_rate, 0.9);
    assert!(quote.has_discount());
    assert_eq!(quote.currency, SETTLEMENT_CURRENCY);
}

#[test]
fn test_missing_entry_defaults_to_no_discount() {
    let quote = compute_quote(50.0, 1.0, &DiscountTable::new());
    assert_eq!(quote.discount_rate, 1.0);
    assert_eq!(quote.discounted_price, 50.0);
    assert_eq!(quote.savings, 0.0);
    assert!(!quote.has_discount());
}

#[test]
fn test_rate_of_one_is_not_a_discount() {
    let quote = compute_quote(100.0, 2.0, &table(&[(100, 1.0)]));
    assert_eq!(quote.savings, 0.0);
    assert!(!quote.has_discount());
    assert_eq!(discount_label(quote.discount_rate, DiscountLabelStyle::Tenths), None);
}

#[test]
fn test_identities_hold_exactly() {
    let discounts = table(&[(3, 0.7), (17, 0.33), (250, 0.95), (999, 0.81)]);
    for amount in [1.0, 3.0, 17.0, 42.5, 250.0, 999.0, 12345.0] {
        for ratio in [0.1, 1.0, 7.3, 0.0625] {
            let quote = compute_quote(amount, ratio, &discounts);
            let rate = discounts.rate_for(amount);
            assert_eq!(quote.original_price, amount * ratio);
            assert_eq!(quote.discounted_price, quote.original_price * rate);
            assert_eq!(quote.savings, quote.original_price - quote.discounted_price);
        }
    }
}

#[test]
fn test_same_inputs_same_bits() {
    let discounts = table(&[(30, 0.85)]);
    let a = compute_quote(30.0, 7.3, &discounts);
    let b = compute_quote(30.0, 7.3, &discounts);
    assert_eq!(a.discounted_price.to_bits(), b.discounted_price.to_bits());
    assert_eq!(a.savings.to_bits(), b.savings.to_bits());
}

#[test]
fn test_invalid_input_gives_zero_quote() {
    let discounts = table(&[(100, 0.9)]);
    for (amount, ratio) in [(0.0, 1.0), (-5.0, 1.0), (100.0, 0.0), (100.0, -1.0)] {
        let quote = compute_quote(amount, ratio, &discounts);
        assert_eq!(quote.original_price, 0.0);
        assert_eq!(quote.discounted_price, 0.0);
        assert_eq!(quote.savings, 0.0);
        assert!(!quote.has_discount());
    }
}

#[test]
fn test_price_ratio_scales_price() {
    let quote = compute_quote(10.0, 7.3, &table(&[(10, 0.5)]));
    assert_eq!(quote.original_price, 10.0 * 7.3);
    assert_eq!(quote.discounted_price, 10.0 * 7.3 * 0.5);
}

#[test]
fn test_purchase_summary_matches_quote() {
    let quote = compute_quote(200.0, 1.0, &table(&[(200, 0.8)]));
    let summary = PurchaseSummary::from_paid(quote.discounted_price, quote.discount_rate);
    assert!(summary.has_discount());
    let original = summary.original.unwrap();
    assert!((original - quote.original_price).abs() < 1e-9);
    assert!((summary.discount.unwrap() - quote.savings).abs() < 1e-9);
    assert_eq!(summary.percent_badge(), Some(80));
}
