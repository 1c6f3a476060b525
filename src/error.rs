//! Error types for quota pricing.
//!
//! The pricing calculator itself never fails; these errors surface at the
//! boundaries: payload parsing, charge construction and token form input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server payload that could not be turned into a usable config
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Payment method switched off by the administrator
    #[error("Payment method '{0}' is not enabled")]
    PaymentDisabled(String),

    #[error("Top-up amount {requested} is below the minimum of {min_topup}")]
    BelowMinimum { requested: f64, min_topup: f64 },

    #[error("Invalid expiry time: {0}")]
    InvalidExpiry(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Stable machine-readable code, logged alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::InvalidPayload(_) => "INVALID_PAYLOAD",
            Self::PaymentDisabled(_) => "PAYMENT_DISABLED",
            Self::BelowMinimum { .. } => "BELOW_MINIMUM",
            Self::InvalidExpiry(_) => "INVALID_EXPIRY",
            Self::Json(_) => "INVALID_JSON",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
