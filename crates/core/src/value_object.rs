//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable domain objects defined entirely by their
/// attribute values: two with the same values are the same value. Entities
/// (see [`crate::Entity`]) are the opposite, identified by id rather than
/// by value.
///
/// Requires `Clone + PartialEq + Debug` so values stay cheap to copy,
/// comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
