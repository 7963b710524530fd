//! Order entry flow
//!
//! Guides a customer from a product selection to a validated creation
//! payload. Total price and change are recomputed on every input change
//! and frozen into the payload at submission; validation failures block
//! submission before any network call.

use serde::{Deserialize, Serialize};
use shared::models::{DeliveryMethod, OrderCreate, Product};
use shared::pricing;
use thiserror::Error;

/// Why a submission is blocked
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryError {
    #[error("Please login again")]
    NotLoggedIn,

    #[error("Please enter a valid quantity (minimum 1)")]
    InvalidQuantity,

    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Insufficient amount. Total price is {}", pricing::peso(*.total_price))]
    InsufficientAmount { total_price: f64 },

    #[error("Please enter a table number for Dine-in")]
    MissingTableNumber,

    #[error("Please enter a delivery address")]
    MissingDeliveryAddress,
}

/// Order entry form state
///
/// One instance per opened entry dialog; opening the flow for a product
/// resets every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEntryForm {
    product: Product,
    quantity: i32,
    amount: f64,
    delivery_method: DeliveryMethod,
    table_number: String,
    delivery_address: String,
}

impl OrderEntryForm {
    /// Open the entry flow for a product
    pub fn open(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
            amount: 0.0,
            delivery_method: DeliveryMethod::DineIn,
            table_number: String::new(),
            delivery_address: String::new(),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn delivery_method(&self) -> DeliveryMethod {
        self.delivery_method
    }

    /// Set the quantity, clamped up to the minimum of 1
    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity.max(1);
    }

    /// Parse raw quantity input; non-numeric input falls back to 1
    pub fn set_quantity_input(&mut self, raw: &str) {
        self.set_quantity(raw.trim().parse::<i32>().unwrap_or(1));
    }

    /// Set the tendered amount
    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    /// Parse raw tendered-amount input; non-numeric input falls back to 0
    pub fn set_amount_input(&mut self, raw: &str) {
        self.amount = raw.trim().parse::<f64>().unwrap_or(0.0);
    }

    pub fn set_delivery_method(&mut self, method: DeliveryMethod) {
        self.delivery_method = method;
    }

    pub fn set_table_number(&mut self, value: impl Into<String>) {
        self.table_number = value.into();
    }

    pub fn set_delivery_address(&mut self, value: impl Into<String>) {
        self.delivery_address = value.into();
    }

    /// Total price: quantity x unit price
    pub fn total_price(&self) -> f64 {
        pricing::total_price(self.quantity, self.product.price)
    }

    /// Change due: tendered amount minus total price
    pub fn change(&self) -> f64 {
        pricing::change(self.amount, self.total_price())
    }

    /// Whether the submit control is enabled
    ///
    /// Mirrors `validate` except for the identity check, which only runs
    /// at submission time.
    pub fn can_submit(&self) -> bool {
        self.validate_inputs().is_ok()
    }

    /// Validate the form; the first failure wins
    pub fn validate(&self, customer_name: Option<&str>) -> Result<(), EntryError> {
        if customer_name.is_none() {
            return Err(EntryError::NotLoggedIn);
        }
        self.validate_inputs()
    }

    /// Build the creation payload
    ///
    /// The location field irrelevant to the delivery method is nulled;
    /// total price and change are captured as they stand.
    pub fn build(&self, customer_name: Option<&str>) -> Result<OrderCreate, EntryError> {
        let customer = customer_name.ok_or(EntryError::NotLoggedIn)?;
        self.validate_inputs()?;

        let (table_number, delivery_address) = match self.delivery_method {
            DeliveryMethod::DineIn => (Some(self.table_number.clone()), None),
            DeliveryMethod::Delivery => (None, Some(self.delivery_address.clone())),
        };

        Ok(OrderCreate {
            customer_name: customer.to_string(),
            product_name: self.product.name.clone(),
            product_price: self.product.price,
            quantity: self.quantity,
            total_price: self.total_price(),
            delivery_method: self.delivery_method,
            table_number,
            delivery_address,
            amount: self.amount,
            change: self.change(),
        })
    }

    fn validate_inputs(&self) -> Result<(), EntryError> {
        if self.quantity < 1 {
            return Err(EntryError::InvalidQuantity);
        }
        if self.amount <= 0.0 {
            return Err(EntryError::InvalidAmount);
        }
        let total_price = self.total_price();
        if self.amount < total_price {
            return Err(EntryError::InsufficientAmount { total_price });
        }
        match self.delivery_method {
            DeliveryMethod::DineIn if self.table_number.trim().is_empty() => {
                Err(EntryError::MissingTableNumber)
            }
            DeliveryMethod::Delivery if self.delivery_address.trim().is_empty() => {
                Err(EntryError::MissingDeliveryAddress)
            }
            _ => Ok(()),
        }
    }
}
