//! Comanda Client - HTTP client for the ordering API
//!
//! Provides typed REST calls for the product catalog, stock entries and
//! the order lifecycle.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::OrderingApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::OrderingClient;
