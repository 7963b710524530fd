//! Ordering API trait

use crate::ClientResult;
use async_trait::async_trait;
use shared::models::{Order, OrderCreate, Product, StockEntry};

/// Unified ordering API interface
///
/// Implemented by the network client and by in-memory fakes so view logic
/// can be exercised without a running backend.
#[async_trait]
pub trait OrderingApi: Send + Sync {
    /// Fetch the product catalog
    async fn list_products(&self) -> ClientResult<Vec<Product>>;

    /// Fetch all stock entries
    async fn list_stocks(&self) -> ClientResult<Vec<StockEntry>>;

    /// Fetch the full order list
    async fn list_orders(&self) -> ClientResult<Vec<Order>>;

    /// Create a new order (backend assigns id and Pending status)
    async fn create_order(&self, order: &OrderCreate) -> ClientResult<Order>;

    /// Transition an order to Accepted
    async fn accept_order(&self, id: &str) -> ClientResult<()>;

    /// Transition an order to Delivered
    async fn deliver_order(&self, id: &str) -> ClientResult<()>;

    /// Remove an order, regardless of status
    async fn delete_order(&self, id: &str) -> ClientResult<()>;
}
