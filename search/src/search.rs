//! Search entry point and expansion loop.
//!
//! ```text
//! Ready → Running → { Succeeded, Exhausted, Cancelled }
//!                    (plus BudgetExceeded, raised by the frontier)
//! ```
//!
//! The driver is a plain synchronous function. It only calls the four
//! [`Frontier`] operations and the world's successor/goal/heuristic
//! functions, so strategies are swapped without touching this loop.

use tracing::debug;

use crate::cancel::CancelToken;
use crate::contract::SearchWorldV1;
use crate::error::SearchError;
use crate::frontier::{EnqueueOutcome, Frontier};
use crate::node::SearchNodeV1;

/// Counters collected over one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Nodes dequeued and expanded (goal node not included).
    pub expansions: u64,
    /// Nodes admitted by the frontier, root included.
    pub admitted: u64,
    /// Successors dropped because their state was already visited.
    pub duplicates_suppressed: u64,
    /// Successors dropped because a path at least as cheap was known.
    pub dominated_pruned: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// Normal termination of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<S> {
    /// A goal was dequeued. `path` runs from the start state to the goal.
    Solved { path: Vec<S>, stats: SearchStatsV1 },
    /// The frontier emptied without reaching a goal.
    Exhausted { stats: SearchStatsV1 },
}

impl<S> SearchOutcome<S> {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStatsV1 {
        match self {
            Self::Solved { stats, .. } | Self::Exhausted { stats } => stats,
        }
    }

    /// The solution path, or an empty slice when exhausted.
    #[must_use]
    pub fn path(&self) -> &[S] {
        match self {
            Self::Solved { path, .. } => path,
            Self::Exhausted { .. } => &[],
        }
    }
}

/// Run the driver loop from `start` over `frontier`.
///
/// The frontier must be empty and owned by this run. Cancellation is
/// checked once per iteration, before each dequeue.
///
/// # Errors
///
/// - [`SearchError::BudgetExceeded`] from the frontier, propagated as-is.
/// - [`SearchError::Cancelled`] when `cancel` is set between iterations.
pub fn search<W>(
    world: &W,
    start: W::State,
    frontier: &mut dyn Frontier<W::State>,
    cancel: &CancelToken,
) -> Result<SearchOutcome<W::State>, SearchError>
where
    W: SearchWorldV1 + ?Sized,
{
    let mut stats = SearchStatsV1::default();
    let mut next_creation_order: u64 = 1;

    let root_h = world.heuristic(&start);
    record(frontier.enqueue(SearchNodeV1::root(start, root_h))?, &mut stats);

    while !frontier.is_empty() {
        if cancel.is_cancelled() {
            debug!(
                world = world.world_id(),
                expansions = stats.expansions,
                "search cancelled"
            );
            return Err(SearchError::Cancelled {
                admitted: frontier.admitted(),
                expansions: stats.expansions,
            });
        }

        let Some(current) = frontier.dequeue() else {
            break;
        };

        if world.is_goal(&current.state) {
            finish(&mut stats, frontier);
            debug!(
                world = world.world_id(),
                algorithm = frontier.algorithm_name(),
                depth = current.depth,
                admitted = stats.admitted,
                "goal reached"
            );
            return Ok(SearchOutcome::Solved {
                path: current.path_to_root(),
                stats,
            });
        }

        stats.expansions += 1;
        for next_state in world.next_states(&current.state) {
            let h_cost = world.heuristic(&next_state);
            let child = current.derive(next_state, h_cost, next_creation_order);
            next_creation_order += 1;
            record(frontier.enqueue(child)?, &mut stats);
        }
    }

    finish(&mut stats, frontier);
    debug!(
        world = world.world_id(),
        algorithm = frontier.algorithm_name(),
        admitted = stats.admitted,
        "frontier exhausted"
    );
    Ok(SearchOutcome::Exhausted { stats })
}

fn record(outcome: EnqueueOutcome, stats: &mut SearchStatsV1) {
    match outcome {
        EnqueueOutcome::Admitted => {}
        EnqueueOutcome::DuplicateSuppressed => stats.duplicates_suppressed += 1,
        EnqueueOutcome::Dominated => stats.dominated_pruned += 1,
    }
}

fn finish<S>(stats: &mut SearchStatsV1, frontier: &dyn Frontier<S>) {
    stats.admitted = frontier.admitted();
    stats.frontier_high_water = frontier.high_water();
}
