//! Read-only product lookup port.

use std::sync::Arc;

use crate::product::Product;

/// Product lookups used while editing an order.
///
/// "No match" is a normal outcome (`None` / empty list), not an error.
pub trait ProductDirectory: Send + Sync {
    /// Exact, case-insensitive code match.
    fn find_by_sku(&self, sku: &str) -> Option<Product>;

    /// Case-insensitive name-prefix search, sorted by name.
    fn search_by_name(&self, prefix: &str) -> Vec<Product>;
}

impl<D> ProductDirectory for Arc<D>
where
    D: ProductDirectory + ?Sized,
{
    fn find_by_sku(&self, sku: &str) -> Option<Product> {
        (**self).find_by_sku(sku)
    }

    fn search_by_name(&self, prefix: &str) -> Vec<Product> {
        (**self).search_by_name(prefix)
    }
}
