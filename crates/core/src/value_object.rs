//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances with the same attribute
/// values are equal. A delivery address is a value object, a customer is an
/// entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
