//! View actions
//!
//! Each mutation awaits its backend call and then re-fetches the affected
//! snapshot, so the view converges on backend truth instead of mutating
//! local state optimistically. Failed mutations surface a user-visible
//! message on the owning view and leave the snapshot unchanged; the same
//! policy applies to both the customer and administrator views.

use comanda_client::{ClientError, OrderingApi};
use shared::models::Order;

use crate::catalog::CatalogView;
use crate::entry::OrderEntryForm;
use crate::management::{DeliverGate, ManagementView};
use crate::session::SessionContext;

/// Fallback when order creation fails without a backend message
pub const CREATE_ORDER_FAILED: &str = "Error adding order. Please try again.";

/// Fallback texts for management mutations
pub const ACCEPT_ORDER_FAILED: &str = "Error accepting order. Please try again.";
pub const DELIVER_ORDER_FAILED: &str = "Error delivering order. Please try again.";
pub const DELETE_ORDER_FAILED: &str = "Error deleting order. Please try again.";

/// Backend-provided message when present, else the given fallback
fn surface(err: &ClientError, fallback: &str) -> String {
    err.backend_message()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

/// Refresh the catalog snapshot (poll tick)
pub async fn refresh_catalog(api: &dyn OrderingApi, view: &mut CatalogView) {
    match api.list_products().await {
        Ok(products) => view.apply_products(products),
        Err(err) => {
            tracing::error!("Failed to fetch products: {err}");
            view.apply_fetch_failure();
        }
    }
}

/// Refresh the order snapshot and stock totals (poll tick or re-fetch)
///
/// Poll-tick fetch failures are log-only; the next tick retries against
/// the unchanged snapshot.
pub async fn refresh_management(api: &dyn OrderingApi, view: &mut ManagementView) {
    match api.list_orders().await {
        Ok(orders) => view.apply_orders(orders),
        Err(err) => tracing::error!("Failed to fetch orders: {err}"),
    }
    match api.list_stocks().await {
        Ok(stocks) => view.apply_stocks(&stocks),
        Err(err) => tracing::error!("Failed to fetch stocks: {err}"),
    }
}

/// Submit the order entry form
///
/// Validation failures surface their message and never reach the network.
/// On success the created order is returned: the caller closes the entry
/// flow and navigates the customer to their order list. On backend
/// rejection no partial order exists and the form stays open.
pub async fn submit_order(
    api: &dyn OrderingApi,
    session: &SessionContext,
    form: &OrderEntryForm,
    view: &mut CatalogView,
) -> Option<Order> {
    let payload = match form.build(session.customer_name()) {
        Ok(payload) => payload,
        Err(err) => {
            view.set_message(err.to_string());
            return None;
        }
    };

    match api.create_order(&payload).await {
        Ok(order) => Some(order),
        Err(err) => {
            tracing::error!("Error adding order: {err}");
            view.set_message(surface(&err, CREATE_ORDER_FAILED));
            None
        }
    }
}

/// Accept a pending order, then re-fetch
pub async fn accept_order(api: &dyn OrderingApi, view: &mut ManagementView, id: &str) {
    if let Err(err) = api.accept_order(id).await {
        tracing::error!("Error accepting order: {err}");
        view.set_message(surface(&err, ACCEPT_ORDER_FAILED));
        return;
    }
    refresh_management(api, view).await;
}

/// Deliver an order, then re-fetch
///
/// Returns the low-stock warning to show the operator, if any; the
/// warning never blocks the transition. Delivering is refused outright
/// when aggregated stock is zero (the control is disabled in that state).
pub async fn deliver_order(
    api: &dyn OrderingApi,
    view: &mut ManagementView,
    id: &str,
) -> Option<String> {
    let Some(order) = view.orders().iter().find(|o| o.id == id).cloned() else {
        tracing::warn!("Deliver requested for unknown order {id}");
        return None;
    };

    let warning = match view.deliver_gate(&order) {
        DeliverGate::Disabled => return None,
        DeliverGate::LowStock { warning, .. } => Some(warning),
        DeliverGate::Allowed => None,
    };

    if let Err(err) = api.deliver_order(id).await {
        tracing::error!("Error delivering order: {err}");
        view.set_message(surface(&err, DELIVER_ORDER_FAILED));
        return warning;
    }
    refresh_management(api, view).await;
    warning
}

/// Delete an order regardless of status, then re-fetch
pub async fn delete_order(api: &dyn OrderingApi, view: &mut ManagementView, id: &str) {
    if let Err(err) = api.delete_order(id).await {
        tracing::error!("Error deleting order: {err}");
        view.set_message(surface(&err, DELETE_ORDER_FAILED));
        return;
    }
    refresh_management(api, view).await;
}
