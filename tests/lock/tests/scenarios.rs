//! End-to-end scenarios: river-crossing instances run through the harness.
//!
//! Each test builds a `RiverCrossing` world, runs it with `run()` or
//! `compare_strategies()`, and checks the `SolutionV1` the caller sees.

use std::sync::Arc;
use std::time::Duration;

use ferry_harness::compare::compare_strategies;
use ferry_harness::config::{build_config, RunConfigOverrides, RunConfigV1};
use ferry_harness::runner::run;
use ferry_harness::solution::FailureKindV1;
use ferry_harness::worlds::river_crossing::RiverCrossing;
use ferry_kernel::carrier::params::CrossingParamsV1;
use ferry_kernel::carrier::state::{Bank, CrossingStateV1};
use ferry_search::contract::SearchWorldV1;
use ferry_search::policy::{AdmissionBudgetV1, Strategy};

fn world(a: u32, b: u32, capacity: u32) -> Arc<RiverCrossing> {
    Arc::new(RiverCrossing::new(CrossingParamsV1::new(a, b, capacity)))
}

// ---------------------------------------------------------------------------
// Solvable instances
// ---------------------------------------------------------------------------

#[test]
fn classic_instance_solved_in_eleven_crossings_by_both() {
    let world = world(3, 3, 2);
    for strategy in Strategy::ALL {
        let solution = run(&world, world.start_state(), strategy, &RunConfigV1::default());
        assert!(solution.success, "{strategy:?}: {:?}", solution.error_message);
        assert_eq!(solution.path.len(), 12, "{strategy:?}");
        assert_eq!(solution.path.first(), Some(&world.start_state()));
        assert!(world.is_goal(solution.path.last().unwrap()));
        assert_eq!(solution.method_name, strategy.algorithm_name());
        assert!(solution.error_message.is_none());
        assert!(solution.performance().is_some());
    }
}

#[test]
fn eight_eight_five_both_succeed_with_equal_lengths() {
    let config = RunConfigV1::default();
    let world = world(8, 8, 5);
    let comparison = compare_strategies(&world, &world.start_state(), &config);

    assert!(comparison.bfs.success);
    assert!(comparison.astar.success);
    assert_eq!(comparison.bfs.path.len(), comparison.astar.path.len());
    for solution in comparison.solutions() {
        assert!(solution.states_admitted > 0);
        assert!(solution.states_admitted <= config.budget.max_admitted());
    }
}

// ---------------------------------------------------------------------------
// Unsolvable instance
// ---------------------------------------------------------------------------

#[test]
fn eight_eight_three_has_no_safe_crossing() {
    let world = world(8, 8, 3);
    let comparison = compare_strategies(&world, &world.start_state(), &RunConfigV1::default());

    for solution in comparison.solutions() {
        assert!(!solution.success);
        assert!(solution.path.is_empty());
        assert_eq!(solution.failure, Some(FailureKindV1::NoSolution));
        assert_eq!(solution.error_message.as_deref(), Some("No solution found"));
    }
    // Every reachable state is admitted exactly once by both strategies.
    assert_eq!(comparison.bfs.states_admitted, comparison.astar.states_admitted);
    assert_eq!(comparison.bfs.states_admitted, 21);
}

// ---------------------------------------------------------------------------
// Resource limits
// ---------------------------------------------------------------------------

#[test]
fn budget_of_one_object_reports_memory_limit() {
    let world = world(3, 3, 2);
    let config = RunConfigV1::new(
        Duration::from_secs(30),
        AdmissionBudgetV1::from_object_count(1),
    );
    for strategy in Strategy::ALL {
        let solution = run(&world, world.start_state(), strategy, &config);
        assert!(!solution.success);
        assert!(
            solution
                .error_message
                .as_deref()
                .is_some_and(|m| m.contains("Memory limit")),
            "{strategy:?}: {:?}",
            solution.error_message
        );
        assert_eq!(solution.states_admitted, 2);
    }
}

#[test]
fn zero_timeout_on_large_instance_reports_timeout() {
    let world = world(1000, 1000, 600);
    let config = build_config(&RunConfigOverrides {
        timeout: Some(Duration::ZERO),
        ..RunConfigOverrides::default()
    });
    for strategy in Strategy::ALL {
        let solution = run(&world, world.start_state(), strategy, &config);
        assert!(!solution.success);
        assert_eq!(solution.failure, Some(FailureKindV1::TimedOut));
        assert!(solution
            .error_message
            .as_deref()
            .is_some_and(|m| m.contains("timed out")));
        assert!(solution.path.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Boundaries
// ---------------------------------------------------------------------------

#[test]
fn start_at_goal_returns_single_state() {
    let world = world(3, 3, 2);
    let goal = CrossingStateV1::new(0, 0, Bank::Far);
    for strategy in Strategy::ALL {
        let solution = run(&world, goal, strategy, &RunConfigV1::default());
        assert!(solution.success);
        assert_eq!(solution.path, vec![goal]);
        assert_eq!(solution.steps(), 0);
        assert_eq!(solution.states_admitted, 1);
        assert_eq!(solution.stats.expansions, 0);
    }
}

#[test]
fn zero_capacity_carrier_cannot_move() {
    let world = world(2, 2, 0);
    let solution = run(
        &world,
        world.start_state(),
        Strategy::BreadthFirst,
        &RunConfigV1::default(),
    );
    assert_eq!(solution.failure, Some(FailureKindV1::NoSolution));
    assert_eq!(solution.states_admitted, 1);
}

#[test]
fn empty_instance_starts_one_crossing_short_of_goal() {
    // Nobody to move but the carrier sits on the origin bank with no one
    // to row it, so the goal (carrier on the far bank) is unreachable.
    let world = world(0, 0, 2);
    let solution = run(&world, world.start_state(), Strategy::AStar, &RunConfigV1::default());
    assert_eq!(solution.failure, Some(FailureKindV1::NoSolution));
}

// ---------------------------------------------------------------------------
// Deep paths
// ---------------------------------------------------------------------------

/// (n, n, 4) needs one net crossing pair per unit pair, so the BFS path for
/// n = 200 000 holds 399 998 states and the frontier admits 800 019 nodes.
#[test]
fn deep_instance_returns_a_long_path_without_crashing() {
    let world = world(200_000, 200_000, 4);
    let config = build_config(&RunConfigOverrides {
        timeout: Some(Duration::from_secs(600)),
        ..RunConfigOverrides::default()
    });
    let solution = run(&world, world.start_state(), Strategy::BreadthFirst, &config);

    assert!(solution.success, "{:?}", solution.error_message);
    assert_eq!(solution.path.len(), 399_998);
    assert_eq!(solution.states_admitted, 800_019);
    assert!(world.is_goal(solution.path.last().unwrap()));
}

#[test]
fn deep_instance_abandoned_on_budget_still_returns() {
    let world = world(200_000, 200_000, 4);
    let config = RunConfigV1::new(
        Duration::from_secs(600),
        AdmissionBudgetV1::from_object_count(400_000),
    );
    let solution = run(&world, world.start_state(), Strategy::BreadthFirst, &config);

    assert!(!solution.success);
    assert_eq!(solution.failure, Some(FailureKindV1::MemoryLimitExceeded));
    assert_eq!(solution.states_admitted, 400_001);
    assert!(solution.path.is_empty());
}
