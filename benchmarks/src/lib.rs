//! Shared helpers for ferry benchmark suites.

use std::sync::Arc;

use ferry_harness::worlds::river_crossing::RiverCrossing;
use ferry_kernel::carrier::params::CrossingParamsV1;
use ferry_kernel::carrier::state::CrossingStateV1;
use ferry_search::cancel::CancelToken;
use ferry_search::error::SearchError;
use ferry_search::policy::{AdmissionBudgetV1, Strategy};
use ferry_search::search::{search, SearchOutcome};

/// The comparison table: `(total_a, total_b, capacity)`, smallest first.
pub const COMPARISON_CASES: &[(u32, u32, u32)] = &[
    (3, 3, 2),
    (4, 4, 3),
    (5, 5, 3),
    (6, 6, 4),
    (7, 7, 4),
    (8, 8, 5),
    (9, 9, 5),
    (10, 10, 6),
    (100, 100, 60),
    (300, 300, 200),
    (500, 500, 300),
    (700, 700, 400),
    (1000, 1000, 600),
];

/// Cases that solve in well under a millisecond; used by Criterion groups.
pub const SMALL_CASES: &[(u32, u32, u32)] = &[(3, 3, 2), (6, 6, 4), (10, 10, 6)];

/// Stable label for a case, e.g. `"3x3c2"`.
#[must_use]
pub fn case_name(&(a, b, capacity): &(u32, u32, u32)) -> String {
    format!("{a}x{b}c{capacity}")
}

#[must_use]
pub fn world_for(&(a, b, capacity): &(u32, u32, u32)) -> Arc<RiverCrossing> {
    Arc::new(RiverCrossing::new(CrossingParamsV1::new(a, b, capacity)))
}

/// Run the driver directly on the caller's thread, bypassing the harness
/// worker, deadline and memory probe.
///
/// # Errors
///
/// Propagates [`SearchError`] from the frontier.
pub fn solve_direct(
    world: &RiverCrossing,
    strategy: Strategy,
) -> Result<SearchOutcome<CrossingStateV1>, SearchError> {
    let mut frontier = strategy.build_frontier(AdmissionBudgetV1::default());
    search(world, world.start_state(), frontier.as_mut(), &CancelToken::new())
}

/// JSON snapshot of a case for report metadata.
#[must_use]
pub fn case_json(case: &(u32, u32, u32)) -> serde_json::Value {
    serde_json::json!({
        "capacity": case.2,
        "name": case_name(case),
        "total_a": case.0,
        "total_b": case.1,
    })
}
