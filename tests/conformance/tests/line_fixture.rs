//! The four-stop line fixture: examination order, path, cost, and the
//! degenerate start/target cases.

use conformance_tests::{ExpansionRecorder, IsolatedStart, LineWorld};
use wayfind_core::pathfinder::{Pathfinder, SearchStatus};

#[test]
fn line_search_examines_stops_in_order() {
    let recorder = ExpansionRecorder::new(&LineWorld);
    let mut pathfinder = Pathfinder::new(&recorder, 'A', 'D');
    pathfinder.process_to_completion();

    assert_eq!(pathfinder.status(), SearchStatus::PathFound);
    assert_eq!(pathfinder.path(), ['A', 'B', 'C', 'D']);
    assert_eq!(pathfinder.path_cost(), Some(3.0));
    assert_eq!(pathfinder.examined_node_count(), 4);
    // D is popped as the target and never expanded.
    assert_eq!(recorder.expanded(), ['A', 'B', 'C']);
}

#[test]
fn start_equals_target_yields_single_value_path() {
    let mut pathfinder = Pathfinder::new(&LineWorld, 'B', 'B');
    pathfinder.process_to_completion();

    assert_eq!(pathfinder.status(), SearchStatus::PathFound);
    assert_eq!(pathfinder.path(), ['B']);
    assert_eq!(pathfinder.path_cost(), Some(0.0));
    assert_eq!(pathfinder.examined_node_count(), 1);
}

#[test]
fn isolated_start_terminates_after_one_examination() {
    let mut pathfinder = Pathfinder::new(&IsolatedStart, 'A', 'B');
    pathfinder.process_to_completion();

    assert_eq!(pathfinder.status(), SearchStatus::NoPath);
    assert!(pathfinder.path().is_empty());
    assert_eq!(pathfinder.path_cost(), None);
    assert_eq!(pathfinder.examined_node_count(), 1);
}

#[test]
fn cycle_back_to_start_is_ignored() {
    // Expanding B yields A (the start) as a neighbor again. A is already
    // examined by then, so it must be skipped, leaving the examination
    // count at exactly one per distinct stop.
    let mut pathfinder = Pathfinder::new(&LineWorld, 'A', 'D');
    pathfinder.process_to_completion();

    assert_eq!(pathfinder.examined_node_count(), 4);
    assert_eq!(pathfinder.path(), ['A', 'B', 'C', 'D']);
}

#[test]
fn searching_away_from_the_far_end_still_works() {
    let mut pathfinder = Pathfinder::new(&LineWorld, 'D', 'A');
    pathfinder.process_to_completion();

    assert_eq!(pathfinder.path(), ['D', 'C', 'B', 'A']);
    assert_eq!(pathfinder.path_cost(), Some(3.0));
}
