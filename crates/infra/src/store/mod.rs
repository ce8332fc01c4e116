//! Keyed record storage backing the in-memory adapters.

pub mod keyed_store;

pub use keyed_store::{InMemoryStore, KeyedStore};
