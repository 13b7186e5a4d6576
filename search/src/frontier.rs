//! Frontier strategies: FIFO (breadth-first) and best-first (A*).
//!
//! Both strategies share the admission counter: every node actually
//! accepted is counted against the ceiling of an [`AdmissionBudgetV1`].
//! Rejected enqueues (duplicate or dominated) are normal control flow and
//! are not counted.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::rc::Rc;

use tracing::warn;

use crate::error::SearchError;
use crate::node::{FrontierKey, SearchNodeV1};
use crate::policy::AdmissionBudgetV1;

/// What happened to a node handed to [`Frontier::enqueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueOutcome {
    /// Accepted and counted.
    Admitted,
    /// The state was already admitted once (FIFO visited set).
    DuplicateSuppressed,
    /// A path at least as cheap already reached this state (best-first).
    Dominated,
}

/// An ordering and deduplication policy over search nodes.
///
/// The driver talks to a frontier only through this trait, so strategies
/// are swapped by construction, never by changing the loop.
pub trait Frontier<S> {
    /// Stable label of the strategy (`"BFS"`, `"A*"`).
    fn algorithm_name(&self) -> &'static str;

    /// Offer a node.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::BudgetExceeded`] when admitting the node
    /// pushes the admitted count past the ceiling.
    fn enqueue(&mut self, node: Rc<SearchNodeV1<S>>) -> Result<EnqueueOutcome, SearchError>;

    /// Remove the next node to expand.
    fn dequeue(&mut self) -> Option<Rc<SearchNodeV1<S>>>;

    /// Nodes currently waiting.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total nodes admitted so far (never decreases).
    fn admitted(&self) -> u64;

    /// High-water mark of [`Frontier::len`].
    fn high_water(&self) -> u64;
}

/// Admission counter shared by both strategies.
#[derive(Debug, Clone)]
struct AdmissionCounter {
    admitted: u64,
    limit: u64,
    high_water: u64,
}

impl AdmissionCounter {
    fn new(budget: AdmissionBudgetV1) -> Self {
        Self {
            admitted: 0,
            limit: budget.max_admitted(),
            high_water: 0,
        }
    }

    /// Count one admission; `len` is the frontier size after the push.
    fn admit(&mut self, len: usize) -> Result<(), SearchError> {
        self.admitted += 1;
        self.high_water = self.high_water.max(len as u64);
        if self.admitted > self.limit {
            warn!(
                admitted = self.admitted,
                limit = self.limit,
                "admission budget exceeded"
            );
            return Err(SearchError::BudgetExceeded {
                admitted: self.admitted,
                limit: self.limit,
            });
        }
        Ok(())
    }
}

/// Breadth-first frontier.
///
/// States are marked visited when they are *enqueued*, not when they are
/// dequeued. With a strict FIFO queue this makes the first path to reach
/// any state a shortest one in steps, and each state is admitted at most
/// once.
pub struct FifoFrontier<S> {
    queue: VecDeque<Rc<SearchNodeV1<S>>>,
    visited: HashSet<S>,
    counter: AdmissionCounter,
}

impl<S: Clone + Eq + Hash> FifoFrontier<S> {
    #[must_use]
    pub fn new(budget: AdmissionBudgetV1) -> Self {
        Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
            counter: AdmissionCounter::new(budget),
        }
    }

    /// Whether `state` has been admitted before.
    #[must_use]
    pub fn is_visited(&self, state: &S) -> bool {
        self.visited.contains(state)
    }
}

impl<S: Clone + Eq + Hash> Frontier<S> for FifoFrontier<S> {
    fn algorithm_name(&self) -> &'static str {
        "BFS"
    }

    fn enqueue(&mut self, node: Rc<SearchNodeV1<S>>) -> Result<EnqueueOutcome, SearchError> {
        if !self.visited.insert(node.state.clone()) {
            return Ok(EnqueueOutcome::DuplicateSuppressed);
        }
        self.queue.push_back(node);
        self.counter.admit(self.queue.len())?;
        Ok(EnqueueOutcome::Admitted)
    }

    fn dequeue(&mut self) -> Option<Rc<SearchNodeV1<S>>> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn admitted(&self) -> u64 {
        self.counter.admitted
    }

    fn high_water(&self) -> u64 {
        self.counter.high_water
    }
}

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
struct FrontierEntry<S> {
    key: Reverse<FrontierKey>,
    node: Rc<SearchNodeV1<S>>,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first (A*) frontier.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the lowest `g + h`
/// - A `HashMap` of the best `g_cost` seen per state, for dominance pruning
///
/// A dominated entry already in the heap is not removed; it is popped and
/// expanded like any other node.
pub struct BestFirstFrontier<S> {
    heap: BinaryHeap<FrontierEntry<S>>,
    best_cost: HashMap<S, u64>,
    counter: AdmissionCounter,
}

impl<S: Clone + Eq + Hash> BestFirstFrontier<S> {
    #[must_use]
    pub fn new(budget: AdmissionBudgetV1) -> Self {
        Self {
            heap: BinaryHeap::new(),
            best_cost: HashMap::new(),
            counter: AdmissionCounter::new(budget),
        }
    }

    /// Cheapest path cost recorded for `state`, if it was ever admitted.
    #[must_use]
    pub fn best_cost(&self, state: &S) -> Option<u64> {
        self.best_cost.get(state).copied()
    }
}

impl<S: Clone + Eq + Hash> Frontier<S> for BestFirstFrontier<S> {
    fn algorithm_name(&self) -> &'static str {
        "A*"
    }

    fn enqueue(&mut self, node: Rc<SearchNodeV1<S>>) -> Result<EnqueueOutcome, SearchError> {
        match self.best_cost.entry(node.state.clone()) {
            Entry::Occupied(mut seen) => {
                if *seen.get() <= node.g_cost {
                    return Ok(EnqueueOutcome::Dominated);
                }
                seen.insert(node.g_cost);
            }
            Entry::Vacant(slot) => {
                slot.insert(node.g_cost);
            }
        }
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::from(node.as_ref())),
            node,
        });
        self.counter.admit(self.heap.len())?;
        Ok(EnqueueOutcome::Admitted)
    }

    fn dequeue(&mut self) -> Option<Rc<SearchNodeV1<S>>> {
        self.heap.pop().map(|e| e.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn admitted(&self) -> u64 {
        self.counter.admitted
    }

    fn high_water(&self) -> u64 {
        self.counter.high_water
    }
}
