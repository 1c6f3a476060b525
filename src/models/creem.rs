use serde::{Deserialize, Serialize};

/// Fixed-price product sold through Creem checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreemProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub price: f64,
    /// Quota credited on purchase
    #[serde(default)]
    pub quota: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

impl CreemProduct {
    pub fn price_symbol(&self) -> &'static str {
        match self.currency.as_deref() {
            Some("EUR") => "€",
            _ => "$",
        }
    }

    pub fn display_price(&self) -> String {
        format!("{}{}", self.price_symbol(), self.price)
    }
}
