//! Entity trait: objects identified by id, not by attribute values.

/// Minimal interface for domain entities.
///
/// An entity keeps its identity across attribute changes; two entities with
/// the same id are the same entity. Compare with [`crate::ValueObject`].
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
