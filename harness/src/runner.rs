//! Harness runner: executes one search under a deadline and budget.
//!
//! The runner uses ONLY search APIs: `Strategy::build_frontier`, `search`,
//! `CancelToken`. It does not implement any search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! snapshot RSS → start clock → spawn worker
//!   worker: build_frontier() → search() under catch_unwind → send outcome
//! recv_timeout(deadline)
//!   → on deadline: cancel token → wait for worker → TimedOut
//! map outcome → join worker → snapshot RSS → attach performance
//! ```
//!
//! Every path out of [`run`] produces a [`SolutionV1`]; nothing here returns
//! an error or lets a worker panic escape.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use tracing::{info, info_span, warn};

use ferry_search::cancel::CancelToken;
use ferry_search::contract::SearchWorldV1;
use ferry_search::error::SearchError;
use ferry_search::policy::Strategy;
use ferry_search::search::{search, SearchOutcome};

use crate::config::RunConfigV1;
use crate::memory::MemorySnapshot;
use crate::solution::{FailureKindV1, PerformanceReportV1, SolutionV1};

const DISCONNECTED_MESSAGE: &str = "Search worker exited without reporting a result";

/// What the worker thread sends back.
type WorkerResult<S> = thread::Result<Result<SearchOutcome<S>, SearchError>>;

/// Run `strategy` on `world` from `start` under `config`.
///
/// The search runs on its own named thread. The caller's thread waits for
/// at most `config.timeout`; past the deadline it cancels the search and
/// waits for the worker to stop (at most one more expansion) so the
/// reported admitted count is final.
pub fn run<W>(
    world: &Arc<W>,
    start: W::State,
    strategy: Strategy,
    config: &RunConfigV1,
) -> SolutionV1<W::State>
where
    W: SearchWorldV1 + Send + Sync + 'static,
    W::State: Send + 'static,
{
    let method_name = strategy.algorithm_name();
    let span = info_span!("run", world = world.world_id(), algorithm = method_name);
    let _guard = span.enter();

    let memory_before = MemorySnapshot::take();
    let clock = Instant::now();

    let cancel = CancelToken::new();
    let (tx, rx) = mpsc::channel::<WorkerResult<W::State>>();
    let worker_world = Arc::clone(world);
    let worker_cancel = cancel.clone();
    let budget = config.budget;

    info!(
        max_admitted = budget.max_admitted(),
        timeout_millis = u64::try_from(config.timeout.as_millis()).unwrap_or(u64::MAX),
        "run started"
    );

    let spawned = thread::Builder::new()
        .name(format!("ferry-{}", strategy.slug()))
        .spawn(move || {
            let result = catch_unwind(AssertUnwindSafe(|| {
                let mut frontier = strategy.build_frontier(budget);
                search(&*worker_world, start, frontier.as_mut(), &worker_cancel)
            }));
            // The receiver may already be gone if the caller's thread died.
            let _ = tx.send(result);
        });

    let handle = match spawned {
        Ok(handle) => handle,
        Err(err) => {
            warn!(error = %err, "worker thread failed to start");
            let mut solution = SolutionV1::failed_with_message(
                method_name,
                FailureKindV1::Internal,
                0,
                format!("Search could not start: {err}"),
            );
            attach(&mut solution, &memory_before, clock);
            return solution;
        }
    };

    let mut solution = match rx.recv_timeout(config.timeout) {
        Ok(result) => conclude(method_name, result),
        Err(RecvTimeoutError::Timeout) => {
            cancel.cancel();
            let admitted = match rx.recv() {
                Ok(Ok(Ok(outcome))) => outcome.stats().admitted,
                Ok(Ok(Err(err))) => err.admitted(),
                Ok(Err(_)) | Err(_) => 0,
            };
            warn!(admitted, "deadline elapsed, search cancelled");
            SolutionV1::failed(method_name, FailureKindV1::TimedOut, admitted)
        }
        Err(RecvTimeoutError::Disconnected) => {
            warn!("worker exited without reporting");
            worker_vanished(method_name)
        }
    };

    if handle.join().is_err() {
        warn!("worker panicked outside the search");
    }

    attach(&mut solution, &memory_before, clock);
    info!(
        success = solution.success,
        steps = solution.steps(),
        admitted = solution.states_admitted,
        "run finished"
    );
    solution
}

/// Map a worker result received before the deadline.
fn conclude<S>(method_name: &'static str, result: WorkerResult<S>) -> SolutionV1<S> {
    match result {
        Ok(Ok(SearchOutcome::Solved { path, stats })) => {
            SolutionV1::solved(method_name, path, stats)
        }
        Ok(Ok(SearchOutcome::Exhausted { stats })) => {
            SolutionV1::failed(method_name, FailureKindV1::NoSolution, stats.admitted)
                .with_stats(stats)
        }
        Ok(Err(SearchError::BudgetExceeded { admitted, limit })) => {
            warn!(admitted, limit, "admission budget exceeded");
            SolutionV1::failed(method_name, FailureKindV1::MemoryLimitExceeded, admitted)
        }
        Ok(Err(SearchError::Cancelled { admitted, .. })) => {
            SolutionV1::failed(method_name, FailureKindV1::TimedOut, admitted)
        }
        Err(payload) => {
            let detail = panic_message(payload.as_ref());
            warn!(detail, "search panicked");
            SolutionV1::failed_with_message(
                method_name,
                FailureKindV1::Internal,
                0,
                format!("{}: {detail}", FailureKindV1::Internal.message()),
            )
        }
    }
}

fn worker_vanished<S>(method_name: &'static str) -> SolutionV1<S> {
    SolutionV1::failed_with_message(
        method_name,
        FailureKindV1::Internal,
        0,
        DISCONNECTED_MESSAGE.to_string(),
    )
}

fn attach<S>(solution: &mut SolutionV1<S>, before: &MemorySnapshot, clock: Instant) {
    let elapsed_millis = u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);
    let memory_delta_bytes = before.delta_to(&MemorySnapshot::take());
    solution.attach_performance(PerformanceReportV1 {
        elapsed_millis,
        memory_delta_bytes,
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
