//! Pricing, eligibility and unit arithmetic for the API reselling console's
//! top-up, token and order flows.

pub mod config;
pub mod currency;
pub mod error;
pub mod models;
pub mod orders;
pub mod payments;
pub mod presets;
pub mod pricing;
pub mod tokens;
pub mod topup;

pub use currency::convert_for_display;
pub use payments::is_pay_method_eligible;
pub use pricing::compute_quote;
