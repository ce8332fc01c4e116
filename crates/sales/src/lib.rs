//! Sales order entry.
//!
//! Domain logic for editing one sales order at a time: the order aggregate and
//! its line items, total recalculation, save-time validation, and the editing
//! session that ties them to catalog lookups, persistence, and user
//! notifications. No IO happens here; storage and lookups are ports.

pub mod catalog;
pub mod config;
pub mod editor;
pub mod message;
pub mod notify;
pub mod order;
pub mod pricing;
pub mod save;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use catalog::{Catalog, CatalogLookup};
pub use config::{Messages, SessionConfig};
pub use editor::{EditingSession, LineAssignment, QuantityChange};
pub use message::OrderChanged;
pub use notify::{InMemoryNotifier, Notification, Notifier, Severity, TracingNotifier};
pub use order::{DEFAULT_QUANTITY, DeliveryAddress, LineItem, Order, OrderId, PaymentMethod};
pub use pricing::{format_amount, line_subtotal, order_total};
pub use save::{OrderRepository, SaveOutcome, save_order};
pub use validation::{validate_address, validate_for_save};
