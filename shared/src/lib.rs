//! Shared types for the comanda ordering frontend
//!
//! Wire data models, derived money/stock computations, and error payloads
//! used by both the HTTP client and the dashboard crates.

pub mod error;
pub mod models;
pub mod pricing;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
