//! Order history presentation rules and affiliate quota transfer checks.

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{OrderPage, OrderStatus, StatusTone, TopupOrder};
use crate::tokens::QuotaUnits;

const ALL_TOPUPS_ROUTE: &str = "/api/user/topup";
const OWN_TOPUPS_ROUTE: &str = "/api/user/topup/self";
const COMPLETE_TOPUP_ROUTE: &str = "/api/user/topup/complete";

/// One order-history row ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub trade_no: String,
    pub status: String,
    #[serde(skip)]
    pub tone: StatusTone,
    pub payment_method: String,
    pub amount: f64,
    pub money: f64,
    pub subscription: bool,
}

impl From<&TopupOrder> for OrderRow {
    fn from(order: &TopupOrder) -> Self {
        Self {
            trade_no: order.trade_no.clone(),
            status: order.status.as_str().to_string(),
            tone: order.status.tone(),
            payment_method: payment_method_label(order.payment_method.as_deref()),
            amount: order.amount,
            money: order.money,
            subscription: is_subscription_topup(order.amount, &order.trade_no),
        }
    }
}

impl OrderRow {
    /// Admins may mark a pending order as paid.
    pub fn can_admin_complete(&self, is_admin: bool) -> bool {
        is_admin && OrderStatus::parse(&self.status) == OrderStatus::Pending
    }
}

pub fn order_rows(page: &OrderPage) -> Vec<OrderRow> {
    page.items.iter().map(OrderRow::from).collect()
}

/// Human label for a payment method stored on an order.
pub fn payment_method_label(payment_method: Option<&str>) -> String {
    match payment_method {
        Some("stripe") => "Stripe".to_string(),
        Some("creem") => "Creem".to_string(),
        Some("alipay") => "Alipay".to_string(),
        Some("wxpay") => "WeChat".to_string(),
        Some(other) if !other.is_empty() => other.to_string(),
        _ => "-".to_string(),
    }
}

/// Orders created by subscription billing carry no top-up amount and a
/// trade number starting with `sub`.
pub fn is_subscription_topup(amount: f64, trade_no: &str) -> bool {
    amount == 0.0 && trade_no.to_lowercase().starts_with("sub")
}

/// Query string for one page of order history.
pub fn order_history_query(page: u32, page_size: u32, keyword: Option<&str>) -> String {
    let mut qs = format!("p={}&page_size={}", page.max(1), page_size.max(1));
    if let Some(keyword) = keyword.map(str::trim).filter(|k| !k.is_empty()) {
        qs.push_str("&keyword=");
        qs.push_str(&urlencoding::encode(keyword));
    }
    qs
}

/// Path and query for one page of order history. Admins see every user's
/// orders, everyone else only their own.
pub fn order_history_path(is_admin: bool, page: u32, page_size: u32, keyword: Option<&str>) -> String {
    let base = if is_admin { ALL_TOPUPS_ROUTE } else { OWN_TOPUPS_ROUTE };
    format!("{}?{}", base, order_history_query(page, page_size, keyword))
}

/// Body of a manual order completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompleteOrderRequest {
    pub trade_no: String,
}

impl CompleteOrderRequest {
    pub fn new(order: &TopupOrder, is_admin: bool) -> Result<Self> {
        if !is_admin {
            return Err(AppError::BadRequest(
                "Only administrators can complete orders".to_string(),
            ));
        }
        if order.status != OrderStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Order {} is {}, only pending orders can be completed",
                order.trade_no,
                order.status.as_str()
            )));
        }
        Ok(Self {
            trade_no: order.trade_no.clone(),
        })
    }

    pub fn route(&self) -> &'static str {
        COMPLETE_TOPUP_ROUTE
    }
}

/// Affiliate rewards can only be moved to the balance one unit's worth of
/// quota at a time or more.
pub fn validate_affiliate_transfer(quota: i64, units: &QuotaUnits) -> Result<()> {
    let minimum = units.per_unit().round() as i64;
    if quota < minimum {
        return Err(AppError::BadRequest(format!(
            "Transfer amount must be at least {} quota",
            minimum
        )));
    }
    Ok(())
}
