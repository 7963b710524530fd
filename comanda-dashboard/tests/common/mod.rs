//! In-memory fake of the ordering API
//!
//! Behaves like the real backend: creation assigns an id and Pending
//! status, accept/deliver apply forward transitions only, delete is
//! unconditional. Failure flags simulate network loss and backend
//! rejections.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use comanda_client::{ClientError, ClientResult, OrderingApi};
use shared::models::{
    DeliveryMethod, Order, OrderCreate, OrderStatus, Product, ProductRef, StockEntry, StockProduct,
};

#[derive(Default)]
pub struct FakeApi {
    pub products: Mutex<Vec<Product>>,
    pub stocks: Mutex<Vec<StockEntry>>,
    pub orders: Mutex<Vec<Order>>,
    next_id: Mutex<u32>,
    /// Simulate an unreachable backend for list calls
    pub fail_fetches: Mutex<bool>,
    /// Simulate a backend rejection of order creation
    pub reject_create: Mutex<Option<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let api = Self::new();
        *api.products.lock().unwrap() = products;
        api
    }

    pub fn seed_stock(&self, product_name: &str, quantity: i32) {
        self.stocks.lock().unwrap().push(StockEntry {
            id: None,
            product: ProductRef::Populated(StockProduct {
                name: product_name.to_string(),
            }),
            quantity,
        });
    }

    pub fn seed_order(&self, status: OrderStatus) -> Order {
        let order = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            Order {
                id: format!("o{}", *next_id),
                customer_name: format!("Customer {}", *next_id),
                product_name: "Burger".to_string(),
                product_price: 100.0,
                quantity: 1,
                total_price: 100.0,
                amount: 100.0,
                change: 0.0,
                delivery_method: DeliveryMethod::DineIn,
                table_number: Some("1".to_string()),
                delivery_address: None,
                status,
                created_at: None,
            }
        };
        self.orders.lock().unwrap().push(order.clone());
        order
    }

    pub fn order_status(&self, id: &str) -> Option<OrderStatus> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.status)
    }

    fn check_reachable(&self) -> ClientResult<()> {
        if *self.fail_fetches.lock().unwrap() {
            return Err(ClientError::Internal("connection reset".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderingApi for FakeApi {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.check_reachable()?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn list_stocks(&self) -> ClientResult<Vec<StockEntry>> {
        self.check_reachable()?;
        Ok(self.stocks.lock().unwrap().clone())
    }

    async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.check_reachable()?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn create_order(&self, create: &OrderCreate) -> ClientResult<Order> {
        if let Some(message) = self.reject_create.lock().unwrap().clone() {
            return Err(ClientError::Validation(message));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let order = Order {
            id: format!("o{}", *next_id),
            customer_name: create.customer_name.clone(),
            product_name: create.product_name.clone(),
            product_price: create.product_price,
            quantity: create.quantity,
            total_price: create.total_price,
            amount: create.amount,
            change: create.change,
            delivery_method: create.delivery_method,
            table_number: create.table_number.clone(),
            delivery_address: create.delivery_address.clone(),
            status: OrderStatus::Pending,
            created_at: None,
        };
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn accept_order(&self, id: &str) -> ClientResult<()> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ClientError::NotFound("Order not found".to_string()))?;
        if !order.status.can_transition_to(OrderStatus::Accepted) {
            return Err(ClientError::Validation("Order cannot be accepted".to_string()));
        }
        order.status = OrderStatus::Accepted;
        Ok(())
    }

    async fn deliver_order(&self, id: &str) -> ClientResult<()> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ClientError::NotFound("Order not found".to_string()))?;
        if !order.status.can_transition_to(OrderStatus::Delivered) {
            return Err(ClientError::Validation("Order cannot be delivered".to_string()));
        }
        order.status = OrderStatus::Delivered;
        Ok(())
    }

    async fn delete_order(&self, id: &str) -> ClientResult<()> {
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.id != id);
        if orders.len() == before {
            return Err(ClientError::NotFound("Order not found".to_string()));
        }
        Ok(())
    }
}

/// Install the test log subscriber once per binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn burger() -> Product {
    Product {
        id: "p1".to_string(),
        name: "Burger".to_string(),
        price: 100.0,
        image: "/img/burger.png".to_string(),
        available: true,
    }
}
