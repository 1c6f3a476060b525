use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use quota_pricing::config::Config;
use quota_pricing::currency::{DisplayRates, exchange_rate_banner, format_money};
use quota_pricing::models::{CurrencyKind, DiscountTable};
use quota_pricing::payments::{Availability, DisabledReason, methods_with_availability};
use quota_pricing::presets::render_preset_grid;
use quota_pricing::pricing::compute_quote;
use quota_pricing::topup::TopupConfig;

#[derive(Parser)]
#[command(name = "quota-pricing", version, about = "Top-up pricing calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Quote a top-up amount
    Quote {
        #[arg(long)]
        amount: f64,
        /// Price ratio (defaults to PRICE_RATIO)
        #[arg(long)]
        ratio: Option<f64>,
        /// Discount entry as AMOUNT=RATE, repeatable
        #[arg(long = "discount", value_parser = parse_discount)]
        discounts: Vec<(u64, f64)>,
        /// Also show figures in this display currency
        #[arg(long)]
        currency: Option<CurrencyKind>,
    },
    /// Render preset cards from a saved top-up info payload
    Presets {
        #[arg(long)]
        info: PathBuf,
        #[arg(long)]
        currency: Option<CurrencyKind>,
    },
    /// Show which pay methods accept an amount
    Methods {
        #[arg(long)]
        info: PathBuf,
        #[arg(long)]
        amount: f64,
    },
    /// Convert a USD amount into a display currency
    Convert {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        currency: Option<CurrencyKind>,
    },
}

fn parse_discount(s: &str) -> Result<(u64, f64), String> {
    let (amount, rate) = s
        .split_once('=')
        .ok_or_else(|| format!("expected AMOUNT=RATE, got '{}'", s))?;
    let amount = amount
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid amount '{}': {}", amount, e))?;
    let rate = rate
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid rate '{}': {}", rate, e))?;
    Ok((amount, rate))
}

fn load_topup_config(path: &Path) -> anyhow::Result<TopupConfig> {
    let config = TopupConfig::from_file(path)
        .inspect_err(|e| tracing::error!(code = e.code(), "Rejected top-up info: {}", e))
        .with_context(|| format!("Failed to load top-up info from {}", path.display()))?;
    tracing::debug!(
        methods = config.pay_methods.len(),
        presets = config.presets.len(),
        min_topup = config.min_topup,
        "Loaded top-up info"
    );
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "quota_pricing=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Quote {
            amount,
            ratio,
            discounts,
            currency,
        } => {
            let table: DiscountTable = discounts.into_iter().collect();
            let quote = compute_quote(amount, ratio.unwrap_or(config.price_ratio), &table);
            if quote.is_zero() {
                tracing::warn!("Amount and ratio must be positive; showing a zero quote");
            }
            println!("{}", serde_json::to_string_pretty(&quote)?);

            if let Some(kind) = currency {
                let rates = DisplayRates::snapshot(&config.currency(Some(kind)));
                println!("pay:     {}", rates.format(rates.settlement(quote.discounted_price)));
                if quote.has_discount() {
                    println!("save:    {}", rates.format(rates.settlement(quote.savings)));
                }
            }
        }
        Command::Presets { info, currency } => {
            let topup = load_topup_config(&info)?;
            let currency = config.currency(currency);
            if let Some(banner) = exchange_rate_banner(&currency) {
                println!("{}", banner);
            }
            for card in render_preset_grid(&topup.presets, topup.price_ratio, &currency) {
                println!("{:>12} {}  {}", card.display_value, card.symbol, card.price_line());
            }
        }
        Command::Methods { info, amount } => {
            let topup = load_topup_config(&info)?;
            tracing::info!(amount, "Checking pay methods");
            for (method, availability) in methods_with_availability(&topup.pay_methods, amount, &topup.flags) {
                let status = match availability {
                    Availability::Available => "available".to_string(),
                    Availability::Disabled(DisabledReason::FeatureDisabled) => "disabled".to_string(),
                    Availability::Disabled(DisabledReason::BelowMinimum { min_topup }) => {
                        format!("minimum top-up is {}", min_topup)
                    }
                };
                println!("{:<10} {:<20} {}", method.kind.as_str(), method.name, status);
            }
        }
        Command::Convert { amount, currency } => {
            let currency = config.currency(currency);
            let rates = DisplayRates::snapshot(&currency);
            println!("{}", format_money(&currency.symbol, rates.usd(amount)));
        }
    }

    Ok(())
}
