//! Side-by-side runs of both strategies on one instance.
//!
//! Each strategy gets its own harness run, frontier and cancel token; the
//! two runs share only the immutable world.

use std::sync::Arc;
use std::thread;

use tracing::info;

use ferry_search::contract::SearchWorldV1;
use ferry_search::policy::Strategy;

use crate::config::RunConfigV1;
use crate::runner::run;
use crate::solution::{FailureKindV1, SolutionV1};

/// Results of BFS and A* on the same instance and start state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonV1<S> {
    pub bfs: SolutionV1<S>,
    pub astar: SolutionV1<S>,
}

impl<S> ComparisonV1<S> {
    /// Both runs succeeded with the same number of steps.
    #[must_use]
    pub fn path_lengths_agree(&self) -> bool {
        self.bfs.success && self.astar.success && self.bfs.path.len() == self.astar.path.len()
    }

    /// Results in [`Strategy::ALL`] order.
    #[must_use]
    pub fn solutions(&self) -> [&SolutionV1<S>; 2] {
        [&self.bfs, &self.astar]
    }
}

/// Run BFS, then A*, on the caller's thread of control.
pub fn compare_strategies<W>(
    world: &Arc<W>,
    start: &W::State,
    config: &RunConfigV1,
) -> ComparisonV1<W::State>
where
    W: SearchWorldV1 + Send + Sync + 'static,
    W::State: Send + 'static,
{
    let bfs = run(world, start.clone(), Strategy::BreadthFirst, config);
    let astar = run(world, start.clone(), Strategy::AStar, config);
    log_comparison(world.world_id(), &bfs, &astar);
    ComparisonV1 { bfs, astar }
}

/// Run BFS and A* concurrently, each on its own scoped thread.
///
/// Memory deltas are process-wide, so concurrent runs see each other's
/// allocations; use [`compare_strategies`] when the deltas matter.
pub fn compare_strategies_parallel<W>(
    world: &Arc<W>,
    start: &W::State,
    config: &RunConfigV1,
) -> ComparisonV1<W::State>
where
    W: SearchWorldV1 + Send + Sync + 'static,
    W::State: Send + 'static,
{
    let (bfs, astar) = thread::scope(|scope| {
        let bfs_start = start.clone();
        let astar_start = start.clone();
        let bfs = scope.spawn(move || run(world, bfs_start, Strategy::BreadthFirst, config));
        let astar = scope.spawn(move || run(world, astar_start, Strategy::AStar, config));
        (
            bfs.join()
                .unwrap_or_else(|_| lost(Strategy::BreadthFirst)),
            astar.join().unwrap_or_else(|_| lost(Strategy::AStar)),
        )
    });
    log_comparison(world.world_id(), &bfs, &astar);
    ComparisonV1 { bfs, astar }
}

fn lost<S>(strategy: Strategy) -> SolutionV1<S> {
    SolutionV1::failed_with_message(
        strategy.algorithm_name(),
        FailureKindV1::Internal,
        0,
        format!("{} run thread panicked outside the harness", strategy.algorithm_name()),
    )
}

fn log_comparison<S>(world_id: &str, bfs: &SolutionV1<S>, astar: &SolutionV1<S>) {
    info!(
        world = world_id,
        bfs_steps = bfs.steps(),
        bfs_admitted = bfs.states_admitted,
        astar_steps = astar.steps(),
        astar_admitted = astar.states_admitted,
        "strategies compared"
    );
}
