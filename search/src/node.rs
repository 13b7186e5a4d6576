//! Core search node and frontier ordering key.

use std::fmt;
use std::rc::Rc;

/// An immutable search node.
///
/// The parent link is a shared, read-only backward pointer: siblings share
/// one `Rc` to the same ancestor chain, and an ancestor lives as long as its
/// longest-surviving descendant. Nodes are never mutated after construction;
/// [`SearchNodeV1::derive`] builds a new child instead.
///
/// Every node carries its path cost, so the same type serves uninformed and
/// cost-aware frontiers. Edges have unit cost.
///
/// Dropping a node releases its exclusively owned ancestors one at a time,
/// so chains of any depth are freed without recursion.
pub struct SearchNodeV1<S> {
    /// The state this node stands for.
    pub state: S,
    /// Parent node (`None` for the root).
    pub parent: Option<Rc<SearchNodeV1<S>>>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cumulative path cost (+1 per edge).
    pub g_cost: u64,
    /// Heuristic estimate supplied by the world when the node was created.
    pub h_cost: u64,
    /// Driver-assigned counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl<S> SearchNodeV1<S> {
    /// A root node with zero path cost.
    #[must_use]
    pub fn root(state: S, h_cost: u64) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            depth: 0,
            g_cost: 0,
            h_cost,
            creation_order: 0,
        })
    }

    /// Build a child of `self` one unit-cost edge away.
    #[must_use]
    pub fn derive(self: &Rc<Self>, next_state: S, h_cost: u64, creation_order: u64) -> Rc<Self> {
        Rc::new(Self {
            state: next_state,
            parent: Some(Rc::clone(self)),
            depth: self.depth.saturating_add(1),
            g_cost: self.g_cost.saturating_add(1),
            h_cost,
            creation_order,
        })
    }

    /// Estimated total cost: `g_cost + h_cost`.
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

impl<S> Drop for SearchNodeV1<S> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(parent) = next {
            next = match Rc::try_unwrap(parent) {
                Ok(mut owned) => owned.parent.take(),
                Err(_) => None,
            };
        }
    }
}

/// Shows the parent by `creation_order` only; walking the chain would
/// recurse once per ancestor.
impl<S: fmt::Debug> fmt::Debug for SearchNodeV1<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNodeV1")
            .field("state", &self.state)
            .field("parent", &self.parent.as_ref().map(|p| p.creation_order))
            .field("depth", &self.depth)
            .field("g_cost", &self.g_cost)
            .field("h_cost", &self.h_cost)
            .field("creation_order", &self.creation_order)
            .finish()
    }
}

impl<S: Clone> SearchNodeV1<S> {
    /// States from the root to `self`, inclusive.
    #[must_use]
    pub fn path_to_root(&self) -> Vec<S> {
        let mut path = vec![self.state.clone()];
        let mut current = self.parent.as_deref();
        while let Some(node) = current {
            path.push(node.state.clone());
            current = node.parent.as_deref();
        }
        path.reverse();
        path
    }
}

/// The frontier ordering key: `(f_cost, depth, creation_order)`.
///
/// Lower `f_cost` first, then shallower depth, then older `creation_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub depth: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.depth.cmp(&other.depth))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl<S> From<&SearchNodeV1<S>> for FrontierKey {
    fn from(node: &SearchNodeV1<S>) -> Self {
        Self {
            f_cost: node.f_cost(),
            depth: node.depth,
            creation_order: node.creation_order,
        }
    }
}
