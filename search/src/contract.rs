//! Search world contract trait.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for worlds the driver can search.
///
/// # Contract
///
/// - `next_states` returns only valid successors and never fails; an empty
///   vector means the state is a dead end.
/// - Enumeration must be deterministic: same state → same successors in the
///   same order.
/// - `heuristic` must never overstate the remaining edge count if the caller
///   relies on best-first optimality. The default (0) degrades A* to
///   uniform-cost search.
pub trait SearchWorldV1 {
    /// Immutable, structurally comparable state value.
    type State: Clone + Eq + Hash + Debug;

    /// Stable world identifier.
    fn world_id(&self) -> &str;

    /// All valid successors of `state`.
    fn next_states(&self, state: &Self::State) -> Vec<Self::State>;

    /// Whether `state` satisfies the world's goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimated remaining cost from `state` to a goal.
    fn heuristic(&self, _state: &Self::State) -> u64 {
        0
    }
}
