//! Stock Model

use serde::{Deserialize, Serialize};

/// Product referenced by a stock entry
///
/// Depending on the backend query the reference arrives either populated
/// (an embedded product object) or as the bare product name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProductRef {
    Populated(StockProduct),
    Name(String),
}

impl ProductRef {
    /// Product name this reference resolves to
    pub fn name(&self) -> &str {
        match self {
            ProductRef::Populated(product) => &product.name,
            ProductRef::Name(name) => name,
        }
    }
}

/// Embedded product inside a populated stock entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockProduct {
    #[serde(rename = "product_name")]
    pub name: String,
}

/// Stock entry: on-hand quantity for one product
///
/// A product's stock may be split across several entries; consumers sum
/// the quantities per product name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockEntry {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub product: ProductRef,
    pub quantity: i32,
}

impl StockEntry {
    /// Product name this entry counts toward
    pub fn product_name(&self) -> &str {
        self.product.name()
    }
}
