//! Catalog view state
//!
//! Read-only product snapshot plus the transient flags the catalog screen
//! renders: a loading indicator until the first fetch resolves and a
//! dismissible message for failures.

use serde::{Deserialize, Serialize};
use shared::models::Product;

/// Message shown when the product fetch fails
pub const FETCH_PRODUCTS_FAILED: &str = "Failed to fetch products. Please try again later.";

/// Catalog view state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogView {
    products: Vec<Product>,
    loading: bool,
    message: Option<String>,
    last_synced_ms: Option<i64>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            message: None,
            last_synced_ms: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// True until the first fetch resolves, success or failure
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Dismiss the transient message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Millisecond timestamp of the last successful product fetch
    pub fn last_synced_ms(&self) -> Option<i64> {
        self.last_synced_ms
    }

    /// Replace the snapshot with a fresh fetch result
    pub fn apply_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loading = false;
        self.last_synced_ms = Some(shared::util::now_millis());
    }

    /// Record a failed product fetch
    pub fn apply_fetch_failure(&mut self) {
        self.loading = false;
        self.message = Some(FETCH_PRODUCTS_FAILED.to_string());
    }

    /// Whether the order control is enabled for a product
    pub fn can_order(product: &Product) -> bool {
        product.available
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}
