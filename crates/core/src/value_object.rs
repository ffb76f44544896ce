//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own: two instances holding the
/// same attribute values are interchangeable. [`crate::PropertySet`] is the
/// main one in this workspace; products and orders hold owned copies of it
/// and never share one by reference.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
