//! Entity trait: identity that stays stable for the entity's whole lifetime.

/// Entity marker + minimal interface.
///
/// Entities in this workspace are value-like: they are built once and expose
/// only read-only, derived computations. Behavior lives in providers.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
