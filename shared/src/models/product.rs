//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Backend-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "product_name")]
    pub name: String,
    /// Unit price in currency units
    #[serde(rename = "product_price")]
    pub price: f64,
    /// Image reference (URL or asset path)
    #[serde(rename = "product_image")]
    pub image: String,
    /// Unavailable products cannot be ordered
    #[serde(default)]
    pub available: bool,
}
