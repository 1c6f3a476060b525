use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Which price column the public model list shows.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelPriceType {
    /// Upstream vendor list price
    #[default]
    Official,
    /// Price charged by this site
    Site,
}

/// One model of an endpoint group, prices in USD per million tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelListItem {
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub official_input_price: Option<f64>,
    #[serde(default)]
    pub official_output_price: Option<f64>,
    #[serde(default)]
    pub site_input_price: Option<f64>,
    #[serde(default)]
    pub site_output_price: Option<f64>,
    /// 1 = available
    #[serde(default)]
    pub status: i64,
}

impl ModelListItem {
    /// Input and output price for the selected column.
    pub fn prices(&self, price_type: ModelPriceType) -> (Option<f64>, Option<f64>) {
        match price_type {
            ModelPriceType::Official => (self.official_input_price, self.official_output_price),
            ModelPriceType::Site => (self.site_input_price, self.site_output_price),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == 1
    }
}

/// Endpoint group listed in the model price sidebar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelEndpoint {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub ratio: f64,
}

impl ModelEndpoint {
    /// `2x`-style badge, shown only for a ratio other than 0 or 1.
    pub fn ratio_badge(&self) -> Option<String> {
        if self.ratio == 0.0 || self.ratio == 1.0 || !self.ratio.is_finite() {
            return None;
        }
        Some(format!("{}x", self.ratio))
    }
}
