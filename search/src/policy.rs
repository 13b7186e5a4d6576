//! Search policy types: admission budget and frontier strategy selection.

use std::hash::Hash;
use std::str::FromStr;

use crate::frontier::{BestFirstFrontier, FifoFrontier, Frontier};

/// Default memory budget: 512 MiB.
pub const DEFAULT_MEMORY_BUDGET_BYTES: u64 = 512 * 1024 * 1024;

/// Default per-node byte estimate used to turn the memory budget into an
/// admission ceiling. An estimate only; override it per run.
pub const DEFAULT_BYTES_PER_OBJECT: u64 = 100;

/// Memory budget expressed as an object-count ceiling.
///
/// Live-heap accounting per admission is too expensive to sample, so the
/// frontier counts admitted nodes and compares against
/// `memory_budget_bytes / bytes_per_object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionBudgetV1 {
    /// Total bytes the run may spend on admitted nodes.
    pub memory_budget_bytes: u64,
    /// Assumed cost of one admitted node.
    pub bytes_per_object: u64,
}

impl AdmissionBudgetV1 {
    #[must_use]
    pub const fn new(memory_budget_bytes: u64, bytes_per_object: u64) -> Self {
        Self {
            memory_budget_bytes,
            bytes_per_object,
        }
    }

    /// A budget that admits exactly `count` nodes (one byte per object).
    #[must_use]
    pub const fn from_object_count(count: u64) -> Self {
        Self::new(count, 1)
    }

    /// The admission ceiling.
    ///
    /// Non-positive inputs are clamped: a zero per-object estimate counts as
    /// one byte, and the ceiling never drops below one node so the root can
    /// always be seeded.
    #[must_use]
    pub fn max_admitted(&self) -> u64 {
        (self.memory_budget_bytes / self.bytes_per_object.max(1)).max(1)
    }
}

impl Default for AdmissionBudgetV1 {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_BUDGET_BYTES, DEFAULT_BYTES_PER_OBJECT)
    }
}

/// Frontier strategy, chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// FIFO queue with enqueue-time visited set. Shortest step count.
    BreadthFirst,
    /// Priority by `g + h` with dominance pruning.
    AStar,
}

impl Strategy {
    /// Every strategy, in reporting order.
    pub const ALL: [Self; 2] = [Self::BreadthFirst, Self::AStar];

    /// Stable label used to tag results.
    #[must_use]
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::AStar => "A*",
        }
    }

    /// Lower-case identifier for thread names and benchmark ids.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::AStar => "astar",
        }
    }

    /// Build an empty frontier for this strategy.
    #[must_use]
    pub fn build_frontier<S>(self, budget: AdmissionBudgetV1) -> Box<dyn Frontier<S>>
    where
        S: Clone + Eq + Hash + 'static,
    {
        match self {
            Self::BreadthFirst => Box::new(FifoFrontier::new(budget)),
            Self::AStar => Box::new(BestFirstFrontier::new(budget)),
        }
    }
}

/// Failure parsing a [`Strategy`] label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy {
    pub label: String,
}

impl std::fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown strategy {:?} (expected \"bfs\" or \"astar\")", self.label)
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "astar" | "a*" | "best-first" => Ok(Self::AStar),
            _ => Err(UnknownStrategy {
                label: s.to_string(),
            }),
        }
    }
}
