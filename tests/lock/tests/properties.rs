//! Solution properties checked across a grid of instances: validity of
//! every path state, BFS minimality against an independent exhaustive
//! search, BFS/A* length agreement, and run-to-run idempotence.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use ferry_harness::compare::compare_strategies;
use ferry_harness::config::RunConfigV1;
use ferry_harness::runner::run;
use ferry_harness::worlds::river_crossing::RiverCrossing;
use ferry_kernel::carrier::params::CrossingParamsV1;
use ferry_kernel::carrier::state::{Bank, CrossingStateV1};
use ferry_kernel::proof::hash::path_digest;
use ferry_search::policy::Strategy;

/// Solvable instances, small enough for the exhaustive reference.
const SOLVABLE: &[(u32, u32, u32)] = &[
    (2, 2, 2),
    (3, 3, 2),
    (3, 3, 3),
    (4, 4, 3),
    (5, 5, 3),
    (6, 6, 4),
    (7, 7, 4),
    (8, 8, 5),
    (9, 9, 5),
    (10, 10, 6),
    (4, 2, 2),
];

fn world(&(a, b, capacity): &(u32, u32, u32)) -> Arc<RiverCrossing> {
    Arc::new(RiverCrossing::new(CrossingParamsV1::new(a, b, capacity)))
}

// ---------------------------------------------------------------------------
// Reference search: rules re-derived from scratch, layered BFS.
// ---------------------------------------------------------------------------

fn safe(a: u32, b: u32, total_a: u32, total_b: u32) -> bool {
    let (far_a, far_b) = (total_a - a, total_b - b);
    (a == 0 || a >= b) && (far_a == 0 || far_a >= far_b)
}

fn reference_successors(
    state: (u32, u32, bool),
    &(total_a, total_b, capacity): &(u32, u32, u32),
) -> Vec<(u32, u32, bool)> {
    let (a, b, on_far) = state;
    let max_load = capacity.min(total_a).min(total_b);
    let mut out = Vec::new();
    for move_a in 0..=max_load {
        for move_b in 0..=max_load - move_a {
            if move_a + move_b == 0 {
                continue;
            }
            let next = if on_far {
                (a + move_a, b + move_b)
            } else {
                match (a.checked_sub(move_a), b.checked_sub(move_b)) {
                    (Some(na), Some(nb)) => (na, nb),
                    _ => continue,
                }
            };
            if next.0 <= total_a && next.1 <= total_b && safe(next.0, next.1, total_a, total_b) {
                out.push((next.0, next.1, !on_far));
            }
        }
    }
    out
}

/// Fewest crossings from start to goal, or `None` when unreachable.
fn reference_min_steps(instance: &(u32, u32, u32)) -> Option<usize> {
    let start = (instance.0, instance.1, false);
    let mut depth = HashMap::from([(start, 0usize)]);
    let mut queue = VecDeque::from([start]);
    while let Some(state) = queue.pop_front() {
        let d = depth[&state];
        if state == (0, 0, true) {
            return Some(d);
        }
        for next in reference_successors(state, instance) {
            depth.entry(next).or_insert_with(|| {
                queue.push_back(next);
                d + 1
            });
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn every_path_state_is_valid_and_steps_are_legal() {
    for instance in SOLVABLE {
        let world = world(instance);
        for strategy in Strategy::ALL {
            let solution = run(&world, world.start_state(), strategy, &RunConfigV1::default());
            assert!(solution.success, "{instance:?} {strategy:?}");
            for state in &solution.path {
                assert!(world.is_valid(state), "{instance:?} {strategy:?}: {state}");
            }
            for pair in solution.path.windows(2) {
                let from = (pair[0].left_a, pair[0].left_b, pair[0].carrier == Bank::Far);
                let to = (pair[1].left_a, pair[1].left_b, pair[1].carrier == Bank::Far);
                assert!(
                    reference_successors(from, instance).contains(&to),
                    "{instance:?} {strategy:?}: illegal move {} -> {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

#[test]
fn bfs_path_is_minimal() {
    for instance in SOLVABLE {
        let world = world(instance);
        let solution = run(
            &world,
            world.start_state(),
            Strategy::BreadthFirst,
            &RunConfigV1::default(),
        );
        assert_eq!(
            Some(solution.steps()),
            reference_min_steps(instance),
            "{instance:?}"
        );
    }
}

#[test]
fn bfs_and_astar_agree_on_path_length() {
    for instance in SOLVABLE {
        let world = world(instance);
        let comparison = compare_strategies(&world, &world.start_state(), &RunConfigV1::default());
        assert!(comparison.path_lengths_agree(), "{instance:?}");
    }
}

#[test]
fn unsolvable_instances_match_reference() {
    for instance in &[(1, 1, 2), (4, 4, 2), (5, 5, 2), (8, 8, 3)] {
        assert_eq!(reference_min_steps(instance), None, "{instance:?}");
        let world = world(instance);
        for strategy in Strategy::ALL {
            let solution = run(&world, world.start_state(), strategy, &RunConfigV1::default());
            assert!(!solution.success, "{instance:?} {strategy:?}");
        }
    }
}

#[test]
fn repeated_runs_find_identical_paths() {
    for instance in &[(3, 3, 2), (6, 6, 4), (10, 10, 6)] {
        let world = world(instance);
        for strategy in Strategy::ALL {
            let digests: Vec<_> = (0..3)
                .map(|_| {
                    let solution =
                        run(&world, world.start_state(), strategy, &RunConfigV1::default());
                    path_digest(&solution.path)
                })
                .collect();
            assert!(
                digests.windows(2).all(|w| w[0] == w[1]),
                "{instance:?} {strategy:?}: {digests:?}"
            );
        }
    }
}

#[test]
fn classic_bfs_path_is_the_textbook_sequence() {
    let world = world(&(3, 3, 2));
    let solution = run(
        &world,
        world.start_state(),
        Strategy::BreadthFirst,
        &RunConfigV1::default(),
    );
    let expected: Vec<CrossingStateV1> = [
        (3, 3, 0),
        (3, 1, 1),
        (3, 2, 0),
        (3, 0, 1),
        (3, 1, 0),
        (1, 1, 1),
        (2, 2, 0),
        (0, 2, 1),
        (0, 3, 0),
        (0, 1, 1),
        (0, 2, 0),
        (0, 0, 1),
    ]
    .iter()
    .map(|&(a, b, side)| CrossingStateV1::from_raw(a, b, side).unwrap())
    .collect();
    assert_eq!(solution.path, expected);
}
