use serde::{Deserialize, Serialize};

/// Status of a top-up order as listed in the order history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    Success,
    Pending,
    Expired,
    Other(String),
}

/// Badge tone shown next to an order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Primary,
}

impl OrderStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "success" => OrderStatus::Success,
            "pending" => OrderStatus::Pending,
            "expired" => OrderStatus::Expired,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Success => "success",
            OrderStatus::Pending => "pending",
            OrderStatus::Expired => "expired",
            OrderStatus::Other(s) => s,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            OrderStatus::Success => StatusTone::Success,
            OrderStatus::Pending => StatusTone::Warning,
            OrderStatus::Expired => StatusTone::Danger,
            OrderStatus::Other(_) => StatusTone::Primary,
        }
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(OrderStatus::parse(&s))
    }
}

/// One row of the top-up order history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopupOrder {
    #[serde(default)]
    pub trade_no: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub money: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub create_time: i64,
}

/// One page of order history.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPage {
    #[serde(default)]
    pub items: Vec<TopupOrder>,
    #[serde(default)]
    pub total: u64,
}
