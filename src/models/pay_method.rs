use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payment channel of a configured pay method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PayMethodKind {
    Alipay,
    Wxpay,
    Stripe,
    Creem,
    /// Any other gateway type the server is configured with
    Other(String),
}

impl PayMethodKind {
    pub fn as_str(&self) -> &str {
        match self {
            PayMethodKind::Alipay => "alipay",
            PayMethodKind::Wxpay => "wxpay",
            PayMethodKind::Stripe => "stripe",
            PayMethodKind::Creem => "creem",
            PayMethodKind::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "alipay" => PayMethodKind::Alipay,
            "wxpay" => PayMethodKind::Wxpay,
            "stripe" => PayMethodKind::Stripe,
            "creem" => PayMethodKind::Creem,
            other => PayMethodKind::Other(other.to_string()),
        }
    }

    pub fn is_stripe(&self) -> bool {
        matches!(self, PayMethodKind::Stripe)
    }

    /// Color used when the server leaves a method's color unset.
    pub fn default_color(&self) -> &'static str {
        match self {
            PayMethodKind::Alipay => "rgba(var(--semi-blue-5), 1)",
            PayMethodKind::Wxpay => "rgba(var(--semi-green-5), 1)",
            PayMethodKind::Stripe => "rgba(var(--semi-purple-5), 1)",
            _ => "rgba(var(--semi-primary-5), 1)",
        }
    }
}

impl fmt::Display for PayMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PayMethodKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PayMethodKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(PayMethodKind::parse(&s))
    }
}

/// Validated pay method, ready for eligibility checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayMethod {
    #[serde(rename = "type")]
    pub kind: PayMethodKind,
    pub name: String,
    /// Minimum top-up amount for this method (0 = no minimum)
    #[serde(default)]
    pub min_topup: f64,
    pub color: String,
}

impl PayMethod {
    pub fn new(kind: PayMethodKind, name: impl Into<String>, min_topup: f64) -> Self {
        let color = kind.default_color().to_string();
        Self {
            kind,
            name: name.into(),
            min_topup,
            color,
        }
    }
}

/// Pay method as the server sends it: every field optional and loosely typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPayMethod {
    pub kind: Option<String>,
    pub name: Option<String>,
    pub min_topup: Option<Value>,
    pub color: Option<String>,
}

impl RawPayMethod {
    /// Read one element of the `pay_methods` array. Non-objects yield `None`;
    /// string fields holding anything other than a string read as unset.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        let obj = entry.as_object()?;
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        Some(Self {
            kind: text("type"),
            name: text("name"),
            min_topup: obj.get("min_topup").cloned(),
            color: text("color"),
        })
    }

    /// `min_topup` as a finite number. Numbers and numeric strings are
    /// accepted, anything else reads as 0.
    pub fn normalized_min_topup(&self) -> f64 {
        let parsed = match &self.min_topup {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) if s.trim().is_empty() => Some(0.0),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
            Some(Value::Null) | None => Some(0.0),
            _ => None,
        };
        parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}
