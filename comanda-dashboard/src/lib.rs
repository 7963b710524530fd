//! Comanda Dashboard - presentation-layer core for the ordering frontend
//!
//! Owns the view-state records behind the customer catalog screen and the
//! administrator order-management screen: order entry validation, order
//! grouping and pagination, stock-aware delivery gating, and the polling
//! scheduler that keeps both screens converging on backend truth.
//!
//! Rendering is out of scope; these types produce exactly the data a
//! renderer displays.

pub mod actions;
pub mod catalog;
pub mod entry;
pub mod management;
pub mod poll;
pub mod session;

pub use catalog::CatalogView;
pub use entry::{EntryError, OrderEntryForm};
pub use management::{DeliverGate, ManagementView, OrderGroups, ROWS_PER_PAGE};
pub use poll::{POLL_PERIOD, PollHandle, Poller};
pub use session::SessionContext;
