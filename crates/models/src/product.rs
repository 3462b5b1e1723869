use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub brand_id: String,
    pub name: String,
    /// Free-form packaging spec, e.g. "2 x 1.1ml Syringes".
    pub specs: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_notes: Option<String>,
    /// List price in currency-agnostic integer units.
    pub base_price: i64,
    pub image_url: String,
    pub stock_status: StockStatus,
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("product name required".into()));
    }
    Ok(())
}

pub fn validate_base_price(price: i64) -> Result<(), ModelError> {
    if price < 0 {
        return Err(ModelError::Validation("base price must not be negative".into()));
    }
    Ok(())
}
