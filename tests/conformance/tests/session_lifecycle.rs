//! Session state-machine properties: zero-step idempotence, absorbing
//! terminal states, and monotonic examined-node progress.

use conformance_tests::LineWorld;
use wayfind_core::pathfinder::{Pathfinder, SearchStatus};
use wayfind_harness::runner::{run_sliced, run_to_completion};
use wayfind_harness::worlds::grid::{Cell, GridWorld};

#[test]
fn zero_node_slice_never_mutates_the_session() {
    let mut pathfinder = Pathfinder::new(&LineWorld, 'A', 'D');

    pathfinder.process_nodes(0);
    assert_eq!(pathfinder.status(), SearchStatus::Running);
    assert_eq!(pathfinder.examined_node_count(), 0);
    assert!(pathfinder.path().is_empty());

    // Still completes normally afterwards.
    pathfinder.process_to_completion();
    assert_eq!(pathfinder.path(), ['A', 'B', 'C', 'D']);
}

#[test]
fn terminal_states_are_absorbing() {
    let mut found = Pathfinder::new(&LineWorld, 'A', 'D');
    found.process_to_completion();
    let path: Vec<char> = found.path().to_vec();
    let examined = found.examined_node_count();

    for _ in 0..3 {
        found.process_nodes(5);
        found.process_to_completion();
    }
    assert_eq!(found.status(), SearchStatus::PathFound);
    assert_eq!(found.path(), path);
    assert_eq!(found.examined_node_count(), examined);
}

#[test]
fn examined_count_increases_by_one_per_step() {
    let mut pathfinder = Pathfinder::new(&LineWorld, 'A', 'D');
    let mut previous = pathfinder.examined_node_count();
    assert_eq!(previous, 0);

    while !pathfinder.is_complete() {
        pathfinder.process_nodes(1);
        let current = pathfinder.examined_node_count();
        assert_eq!(current, previous + 1);
        previous = current;
    }
}

#[test]
fn abandoned_session_can_be_resumed_later() {
    let world = GridWorld::new(10, 10);
    let mut pathfinder = Pathfinder::new(&world, Cell::new(0, 0), Cell::new(9, 9));

    // Partial progress, then a pause, then resumption.
    pathfinder.process_nodes(5);
    assert_eq!(pathfinder.status(), SearchStatus::Running);
    let paused_at = pathfinder.examined_node_count();
    assert_eq!(paused_at, 5);

    let summary = run_sliced(&mut pathfinder, 2).unwrap();
    assert_eq!(summary.status, SearchStatus::PathFound);
    assert!(summary.examined_node_count > paused_at);
    assert_eq!(summary.path_cost, Some(18.0));
}

#[test]
fn runner_summary_matches_session_accessors() {
    let world = GridWorld::new(4, 4);
    let mut pathfinder = Pathfinder::new(&world, Cell::new(0, 0), Cell::new(3, 0));
    let summary = run_to_completion(&mut pathfinder);

    assert_eq!(summary.status, pathfinder.status());
    assert_eq!(summary.path, pathfinder.path());
    assert_eq!(summary.examined_node_count, pathfinder.examined_node_count());
    assert_eq!(summary.path_cost, pathfinder.path_cost());
}
