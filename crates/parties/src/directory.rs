//! Read-only customer lookup port.

use std::sync::Arc;

use crate::customer::Customer;

/// Customer lookups used while editing an order.
pub trait CustomerDirectory: Send + Sync {
    /// Case-insensitive name-prefix search, sorted by name. Empty when nothing matches.
    fn search_by_name(&self, prefix: &str) -> Vec<Customer>;
}

impl<D> CustomerDirectory for Arc<D>
where
    D: CustomerDirectory + ?Sized,
{
    fn search_by_name(&self, prefix: &str) -> Vec<Customer> {
        (**self).search_by_name(prefix)
    }
}
