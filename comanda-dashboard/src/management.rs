//! Order management view
//!
//! Splits the order snapshot into the active (Pending/Accepted) and
//! delivered groups on every refresh, paginates each group independently,
//! and gates the deliver action on aggregated stock.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::models::{Order, OrderStatus, StockEntry};
use shared::pricing::{self, LOW_STOCK_THRESHOLD};

/// Rows shown per page in each order table
pub const ROWS_PER_PAGE: usize = 5;

/// The two order groups derived from a snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderGroups {
    /// Pending and Accepted orders
    pub active: Vec<Order>,
    /// Delivered orders
    pub delivered: Vec<Order>,
}

/// Split a snapshot by delivered status, preserving snapshot order
pub fn partition_orders(orders: &[Order]) -> OrderGroups {
    let (delivered, active) = orders
        .iter()
        .cloned()
        .partition(|order| order.status.is_delivered());
    OrderGroups { active, delivered }
}

/// Number of pages for a group of `len` rows
pub fn page_count(len: usize) -> usize {
    len.div_ceil(ROWS_PER_PAGE)
}

/// 1-based page slice: page k covers rows [5(k-1), 5k)
///
/// A page past the end of the list yields an empty slice.
pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(ROWS_PER_PAGE);
    let end = start.saturating_add(ROWS_PER_PAGE);
    &rows[start.min(rows.len())..end.min(rows.len())]
}

/// Outcome of the stock gate for a deliver action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliverGate {
    /// Stock is healthy; deliver silently
    Allowed,
    /// Stock below threshold; deliver proceeds after a warning
    LowStock { remaining: i32, warning: String },
    /// Stock exhausted; the deliver control is disabled
    Disabled,
}

/// Gate a deliver action on the product's aggregated stock
pub fn deliver_gate(stock: i32, product_name: &str) -> DeliverGate {
    if stock <= 0 {
        DeliverGate::Disabled
    } else if stock < LOW_STOCK_THRESHOLD {
        DeliverGate::LowStock {
            remaining: stock,
            warning: format!("Warning: Stock for \"{product_name}\" is low: {stock} left!"),
        }
    } else {
        DeliverGate::Allowed
    }
}

/// Management view state
///
/// Page cursors are client-side state: they survive data refreshes and
/// are reset only by re-mounting the view. A cursor left past the last
/// page after a refresh stays put and yields an empty slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagementView {
    orders: Vec<Order>,
    stock_totals: HashMap<String, i32>,
    active_page: usize,
    delivered_page: usize,
    message: Option<String>,
    last_synced_ms: Option<i64>,
}

impl ManagementView {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            stock_totals: HashMap::new(),
            active_page: 1,
            delivered_page: 1,
            message: None,
            last_synced_ms: None,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Replace the order snapshot (poll tick or post-mutation re-fetch)
    pub fn apply_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        self.last_synced_ms = Some(shared::util::now_millis());
    }

    /// Replace stock totals from a fresh stock fetch
    pub fn apply_stocks(&mut self, entries: &[StockEntry]) {
        self.stock_totals = pricing::stock_totals(entries);
    }

    /// Aggregated stock for a product name; unknown products count as 0
    pub fn stock_for(&self, product_name: &str) -> i32 {
        self.stock_totals.get(product_name).copied().unwrap_or(0)
    }

    /// Derive the active/delivered groups from the current snapshot
    pub fn groups(&self) -> OrderGroups {
        partition_orders(&self.orders)
    }

    pub fn active_page(&self) -> usize {
        self.active_page
    }

    pub fn delivered_page(&self) -> usize {
        self.delivered_page
    }

    pub fn set_active_page(&mut self, page: usize) {
        self.active_page = page.max(1);
    }

    pub fn set_delivered_page(&mut self, page: usize) {
        self.delivered_page = page.max(1);
    }

    /// Rows of the current active-group page
    pub fn active_rows(&self) -> Vec<Order> {
        page_slice(&self.groups().active, self.active_page).to_vec()
    }

    /// Rows of the current delivered-group page
    pub fn delivered_rows(&self) -> Vec<Order> {
        page_slice(&self.groups().delivered, self.delivered_page).to_vec()
    }

    pub fn active_page_count(&self) -> usize {
        page_count(self.groups().active.len())
    }

    pub fn delivered_page_count(&self) -> usize {
        page_count(self.groups().delivered.len())
    }

    /// Gate for the deliver control on an order's row
    pub fn deliver_gate(&self, order: &Order) -> DeliverGate {
        deliver_gate(self.stock_for(&order.product_name), &order.product_name)
    }

    /// The accept control shows only on Pending rows
    pub fn can_accept(order: &Order) -> bool {
        order.status == OrderStatus::Pending
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

    /// Millisecond timestamp of the last successful order fetch
    pub fn last_synced_ms(&self) -> Option<i64> {
        self.last_synced_ms
    }
}

impl Default for ManagementView {
    fn default() -> Self {
        Self::new()
    }
}
