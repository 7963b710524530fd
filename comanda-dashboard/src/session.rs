//! Customer session context
//!
//! Holds the stored customer display name consumed as the order's
//! customer identity. Logout clears the name; where the user navigates
//! afterwards is the caller's concern.

use serde::{Deserialize, Serialize};

/// Session context for the customer-facing views
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionContext {
    customer_name: Option<String>,
}

impl SessionContext {
    /// Session with a logged-in customer
    pub fn logged_in(name: impl Into<String>) -> Self {
        Self {
            customer_name: Some(name.into()),
        }
    }

    /// Anonymous session; order creation is blocked until login
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Stored customer identity, if any
    ///
    /// A blank stored name counts as absent.
    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Clear the stored identity
    pub fn logout(&mut self) {
        self.customer_name = None;
    }
}
