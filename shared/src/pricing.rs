//! Derived money and stock computations
//!
//! Total price and change are computed here once and frozen into the order
//! at creation; management views display the stored snapshots instead of
//! re-deriving from the live catalog.

use std::collections::HashMap;

use crate::models::StockEntry;

/// Stock level below which delivering raises a low-stock warning
pub const LOW_STOCK_THRESHOLD: i32 = 20;

/// Total price for a line: quantity x unit price
pub fn total_price(quantity: i32, unit_price: f64) -> f64 {
    f64::from(quantity) * unit_price
}

/// Change due: tendered amount minus total price
pub fn change(amount: f64, total_price: f64) -> f64 {
    amount - total_price
}

/// Sum stock entries into per-product totals
///
/// Entries resolving to the same product name accumulate into one total.
pub fn stock_totals(entries: &[StockEntry]) -> HashMap<String, i32> {
    let mut totals = HashMap::new();
    for entry in entries {
        *totals.entry(entry.product_name().to_string()).or_insert(0) += entry.quantity;
    }
    totals
}

/// Format an amount for user-facing messages
///
/// Whole amounts drop the fraction ("₱200"), everything else keeps the
/// shortest float form ("₱50.5").
pub fn peso(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("₱{}", amount as i64)
    } else {
        format!("₱{}", amount)
    }
}
