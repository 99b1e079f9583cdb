//! Aggregate root trait.

/// Aggregate root marker + minimal interface.
///
/// The invoice draft is the only aggregate: it has an identity (its session)
/// and a version that moves forward once per committed step.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented by one for every accepted mutation (step commit).
    fn version(&self) -> u64;
}
