//! Quota-unit and expiry arithmetic for API token forms.
//!
//! Token quotas are entered in dollars and stored as integer quota units;
//! expiry is entered as a date-time and stored as Unix seconds, with `-1`
//! meaning the token never expires.

use chrono::{DateTime, NaiveDateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::error::{AppError, Result};

/// Quota units per dollar when the server does not say otherwise.
pub const DEFAULT_QUOTA_PER_UNIT: f64 = 500_000.0;

/// Wire value for "never expires".
pub const NEVER_EXPIRES: i64 = -1;

const SECONDS_PER_DAY: i64 = 86400;
const EXPIRY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NAME_SUFFIX_LEN: usize = 6;
const NAME_SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Conversion between dollar amounts and integer quota units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotaUnits {
    per_unit: f64,
}

impl QuotaUnits {
    /// Zero, negative or non-finite values fall back to the default.
    pub fn new(per_unit: f64) -> Self {
        let per_unit = if per_unit.is_finite() && per_unit > 0.0 {
            per_unit
        } else {
            DEFAULT_QUOTA_PER_UNIT
        };
        Self { per_unit }
    }

    pub fn per_unit(&self) -> f64 {
        self.per_unit
    }

    /// Dollars entered in a form to stored quota, rounded to the nearest unit.
    pub fn to_quota(&self, dollars: f64) -> i64 {
        (dollars * self.per_unit).round() as i64
    }

    /// Stored quota to dollars for a form, rounded to cents.
    pub fn to_dollars(&self, quota: i64) -> f64 {
        (quota as f64 / self.per_unit * 100.0).round() / 100.0
    }
}

impl Default for QuotaUnits {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTA_PER_UNIT)
    }
}

/// Token expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenExpiry {
    Never,
    /// Unix timestamp in seconds
    At(i64),
}

impl TokenExpiry {
    /// Parse the expiry field of a token form.
    ///
    /// Accepts `YYYY-MM-DD HH:MM:SS` (read as UTC) or RFC 3339. Sub-second
    /// precision is rounded up to the next whole second. The time must be
    /// strictly after `now`.
    pub fn parse(input: &str, never_expire: bool, now: DateTime<Utc>) -> Result<Self> {
        if never_expire {
            return Ok(TokenExpiry::Never);
        }

        let input = input.trim();
        let parsed = DateTime::parse_from_rfc3339(input)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| NaiveDateTime::parse_from_str(input, EXPIRY_FORMAT).map(|n| n.and_utc()))
            .map_err(|_| AppError::InvalidExpiry(format!("cannot parse '{}'", input)))?;

        if parsed <= now {
            return Err(AppError::InvalidExpiry(
                "expiry must be later than the current time".into(),
            ));
        }

        let millis = parsed.timestamp_millis();
        let secs = millis.div_euclid(1000) + i64::from(millis.rem_euclid(1000) > 0);
        Ok(TokenExpiry::At(secs))
    }

    /// Expiry `days` after `base_time`.
    pub fn after_days(days: i64, base_time: i64) -> Self {
        TokenExpiry::At(base_time + days * SECONDS_PER_DAY)
    }

    pub fn from_wire(value: i64) -> Self {
        if value == NEVER_EXPIRES {
            TokenExpiry::Never
        } else {
            TokenExpiry::At(value)
        }
    }

    pub fn to_wire(&self) -> i64 {
        match self {
            TokenExpiry::Never => NEVER_EXPIRES,
            TokenExpiry::At(secs) => *secs,
        }
    }

    /// Form representation: empty for tokens that never expire.
    pub fn display(&self) -> String {
        match self {
            TokenExpiry::Never => String::new(),
            TokenExpiry::At(secs) => DateTime::<Utc>::from_timestamp(*secs, 0)
                .map(|dt| dt.format(EXPIRY_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        match self {
            TokenExpiry::Never => false,
            TokenExpiry::At(secs) => *secs <= now,
        }
    }
}

/// Names for a batch of new tokens.
///
/// An empty base name becomes `default`. The first token keeps the base name
/// unless it was empty; all others get a random six-character suffix.
pub fn batch_token_names<R: Rng + ?Sized>(base: &str, count: usize, rng: &mut R) -> Vec<String> {
    let trimmed = base.trim();
    let base_name = if trimmed.is_empty() { "default" } else { trimmed };
    (0..count.max(1))
        .map(|i| {
            if i == 0 && !trimmed.is_empty() {
                base_name.to_string()
            } else {
                format!("{}-{}", base_name, random_suffix(rng))
            }
        })
        .collect()
}

fn random_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..NAME_SUFFIX_LEN)
        .map(|_| NAME_SUFFIX_CHARSET[rng.gen_range(0..NAME_SUFFIX_CHARSET.len())] as char)
        .collect()
}

/// Token form contents as entered.
#[derive(Debug, Clone)]
pub struct TokenDraft {
    pub name: String,
    /// Dollar amount; ignored when `unlimited_quota` is set
    pub remain_quota: f64,
    pub unlimited_quota: bool,
    pub expiry: TokenExpiry,
    pub model_limits: Vec<String>,
}

/// Token body sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenSubmission {
    pub name: String,
    pub remain_quota: i64,
    pub unlimited_quota: bool,
    pub expired_time: i64,
    pub model_limits: String,
    pub model_limits_enabled: bool,
}

impl TokenDraft {
    /// Submission bodies for creating `count` tokens from this draft.
    pub fn submissions<R: Rng + ?Sized>(&self, count: usize, units: &QuotaUnits, rng: &mut R) -> Vec<TokenSubmission> {
        batch_token_names(&self.name, count, rng)
            .into_iter()
            .map(|name| self.submission(name, units))
            .collect()
    }

    /// Submission body for editing an existing token.
    pub fn submission(&self, name: String, units: &QuotaUnits) -> TokenSubmission {
        let model_limits = self.model_limits.join(",");
        TokenSubmission {
            name,
            remain_quota: units.to_quota(self.remain_quota),
            unlimited_quota: self.unlimited_quota,
            expired_time: self.expiry.to_wire(),
            model_limits_enabled: !model_limits.is_empty(),
            model_limits,
        }
    }
}
