//! Order Model

use serde::{Deserialize, Serialize};

/// Order status lifecycle
///
/// Transitions only move forward (Pending -> Accepted -> Delivered, with
/// Accepted skippable); deletion is terminal and allowed from any state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Delivered,
}

impl OrderStatus {
    /// Whether a transition to `next` is a legal forward move
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        match (self, next) {
            (OrderStatus::Pending, OrderStatus::Accepted | OrderStatus::Delivered) => true,
            (OrderStatus::Accepted, OrderStatus::Delivered) => true,
            (OrderStatus::Pending, OrderStatus::Pending) => false,
            (OrderStatus::Accepted, OrderStatus::Pending | OrderStatus::Accepted) => false,
            (OrderStatus::Delivered, _) => false,
        }
    }

    pub fn is_delivered(self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

/// Delivery method for an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DeliveryMethod {
    /// Order is tied to a table number
    #[default]
    #[serde(rename = "Dine-in")]
    DineIn,
    /// Order is shipped to a delivery address
    #[serde(rename = "To be Delivered")]
    Delivery,
}

impl DeliveryMethod {
    /// Wire label, also used in operator-facing text
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryMethod::DineIn => "Dine-in",
            DeliveryMethod::Delivery => "To be Delivered",
        }
    }
}

/// Order entity
///
/// `product_price`, `total_price` and `change` are snapshots captured at
/// creation time; they are never recomputed from the live catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer_name: String,
    pub product_name: String,
    /// Unit price snapshot
    pub product_price: f64,
    pub quantity: i32,
    /// quantity * product_price at creation
    pub total_price: f64,
    /// Tendered amount
    pub amount: f64,
    /// amount - total_price
    pub change: f64,
    pub delivery_method: DeliveryMethod,
    /// Table number (Dine-in only)
    #[serde(default)]
    pub table_number: Option<String>,
    /// Delivery address (To be Delivered only)
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Order {
    /// Location column value: table number for Dine-in, address otherwise
    pub fn location(&self) -> Option<&str> {
        match self.delivery_method {
            DeliveryMethod::DineIn => self.table_number.as_deref(),
            DeliveryMethod::Delivery => self.delivery_address.as_deref(),
        }
    }
}

/// Create order payload
///
/// Status is omitted; the backend defaults new orders to Pending. Exactly
/// one of `table_number` / `delivery_address` is set, the other is
/// serialized as an explicit null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderCreate {
    pub customer_name: String,
    pub product_name: String,
    pub product_price: f64,
    pub quantity: i32,
    pub total_price: f64,
    pub delivery_method: DeliveryMethod,
    pub table_number: Option<String>,
    pub delivery_address: Option<String>,
    pub amount: f64,
    pub change: f64,
}

/// Partial update payload (`PUT orders/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}
