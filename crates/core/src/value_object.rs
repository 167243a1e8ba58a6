//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and defined entirely by their attribute
/// values: two with the same values are equal, and "modifying" one means
/// building a new one. [`crate::Money`] is the canonical example here;
/// contrast with [`crate::Entity`], where identity is what matters.
///
/// The bounds keep value objects cheap to copy around, comparable by value,
/// and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
