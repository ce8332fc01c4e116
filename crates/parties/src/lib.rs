//! Customers module.
//!
//! Customer entities and the read-only directory port used to pick the
//! customer of an order.

pub mod customer;
pub mod directory;

pub use customer::{Customer, CustomerId, CustomerKind};
pub use directory::CustomerDirectory;
