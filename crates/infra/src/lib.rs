//! Infrastructure layer: in-memory adapters for the lookup and persistence ports.

pub mod directory;
pub mod repository;
pub mod store;

mod integration_tests;

pub use directory::{InMemoryCustomerDirectory, InMemoryProductDirectory, InMemoryUserDirectory};
pub use repository::InMemoryOrderRepository;
pub use store::{InMemoryStore, KeyedStore};
