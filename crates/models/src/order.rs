use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Approved,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    /// Forward-only lifecycle: Pending -> Approved -> Shipped, with the
    /// cancellation escape from Pending. Everything else is illegal,
    /// including re-entering the current status.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Approved)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Approved, OrderStatus::Shipped)
        )
    }
}

/// One line of an order request. `unit_price_at_request` is the price
/// quoted when the request was created; later changes to the product's
/// list price or the requester's tier never touch it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price_at_request: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub id: String,
    pub user_id: String,
    /// Requester identity denormalized at creation time, not re-derived.
    pub user_full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic_name: Option<String>,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderRequest {
    /// Estimated total across all lines, at the frozen per-unit quotes.
    pub fn total(&self) -> i64 {
        self.items
            .iter()
            .map(|i| i.unit_price_at_request * i64::from(i.quantity))
            .sum()
    }
}

pub fn validate_quantity(quantity: u32) -> Result<(), ModelError> {
    if quantity < 1 {
        return Err(ModelError::Validation("quantity must be at least 1".into()));
    }
    Ok(())
}
