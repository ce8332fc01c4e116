//! In-memory implementations of the catalog lookup ports.
//!
//! Name searches are case-insensitive prefix matches sorted by name. An empty
//! prefix lists everything.

pub mod customers;
pub mod products;
pub mod users;

pub use customers::InMemoryCustomerDirectory;
pub use products::InMemoryProductDirectory;
pub use users::InMemoryUserDirectory;

pub(crate) fn name_starts_with(name: &str, prefix: &str) -> bool {
    name.to_lowercase().starts_with(&prefix.trim().to_lowercase())
}
