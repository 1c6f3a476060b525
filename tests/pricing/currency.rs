use quota_pricing::convert_for_display;
use quota_pricing::currency::{DisplayRates, format_money};
use quota_pricing::models::{AmountOption, CurrencyConfig, DEFAULT_USD_EXCHANGE_RATE};
use quota_pricing::presets::{PresetCard, render_preset_grid};

#[test]
fn test_usd_to_cny() {
    let displayed = convert_for_display(90.0, &CurrencyConfig::cny(7.0));
    assert_eq!(format_money("¥", displayed), "¥630.00");
}

#[test]
fn test_zero_rate_falls_back_to_default() {
    let displayed = convert_for_display(10.0, &CurrencyConfig::cny(0.0));
    assert_eq!(displayed, 10.0 * DEFAULT_USD_EXCHANGE_RATE);
    assert!(convert_for_display(10.0, &CurrencyConfig::cny(f64::NAN)).is_finite());
}

#[test]
fn test_settlement_prices_in_usd() {
    let rates = DisplayRates::snapshot(&CurrencyConfig::usd(7.0));
    assert_eq!(rates.format(rates.settlement(630.0)), "$90.00");
    assert_eq!(rates.usd(90.0), 90.0);
}

#[test]
fn test_custom_currency_card() {
    // 1 USD = 7 settlement units = 0.5 custom units
    let currency = CurrencyConfig::custom("C", 0.5, 7.0);
    let card = PresetCard::render(&AmountOption::new(10.0, 0.9), 7.0, &currency);
    assert_eq!(card.display_value, 5.0);
    assert!((card.actual_pay - 4.5).abs() < 1e-9);
    assert!((card.savings - 0.5).abs() < 1e-9);
    assert_eq!(card.symbol, "C");
}

#[test]
fn test_grid_shares_one_snapshot() {
    let currency = CurrencyConfig::usd(7.0);
    let presets = [AmountOption::new(7.0, 1.0), AmountOption::new(70.0, 0.9)];
    let cards = render_preset_grid(&presets, 1.0, &currency);
    for (card, preset) in cards.iter().zip(presets.iter()) {
        let single = PresetCard::render(preset, 1.0, &currency);
        assert_eq!(card, &single);
    }
    assert_eq!(format_money("$", cards[1].actual_pay + cards[1].savings), "$10.00");
}
