//! Products catalog module.
//!
//! Product entities, the product code format, and the read-only directory port
//! used by order entry to look products up.

pub mod directory;
pub mod product;
pub mod sku;

pub use directory::ProductDirectory;
pub use product::{Product, ProductId};
pub use sku::{normalize_sku, validate_sku};
