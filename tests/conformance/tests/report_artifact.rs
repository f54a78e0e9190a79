//! End-to-end run-report artifact: render, persist, verify, re-read.

use wayfind_core::pathfinder::Pathfinder;
use wayfind_harness::report::{read_report, render_report, write_report, REPORT_SCHEMA_VERSION};
use wayfind_harness::runner::run_sliced;
use wayfind_harness::worlds::route::RouteNetwork;

fn coastal_network() -> RouteNetwork {
    let mut network = RouteNetwork::new();
    network.add_stop("harbor", 0.0, 0.0);
    network.add_stop("lighthouse", 0.0, 5.0);
    network.add_stop("village", 4.0, 5.0);
    network.add_two_way_leg("harbor", "lighthouse", 6.0);
    network.add_two_way_leg("lighthouse", "village", 4.0);
    network
}

#[test]
fn found_path_report_round_trips_through_disk() {
    let network = coastal_network();
    let start = "harbor".to_string();
    let target = "village".to_string();

    let mut pathfinder = Pathfinder::new(&network, start.clone(), target.clone());
    let summary = run_sliced(&mut pathfinder, 1).unwrap();
    let report = render_report("coastal", &start, &target, &summary);

    assert_eq!(report["schema_version"], REPORT_SCHEMA_VERSION);
    assert_eq!(report["world_id"], "coastal");
    assert_eq!(report["status"], "path_found");
    assert_eq!(
        report["path"],
        serde_json::json!(["harbor", "lighthouse", "village"])
    );
    assert_eq!(report["path_cost"], 10.0);

    let dir = tempfile::tempdir().unwrap();
    write_report(dir.path(), &report).unwrap();
    assert_eq!(read_report(dir.path()).unwrap(), report);
}

#[test]
fn no_path_report_carries_diagnostics_without_a_cost() {
    let mut network = coastal_network();
    network.add_stop("islet", 9.0, 9.0);

    let start = "harbor".to_string();
    let target = "islet".to_string();
    let mut pathfinder = Pathfinder::new(&network, start.clone(), target.clone());
    let summary = run_sliced(&mut pathfinder, 2).unwrap();
    let report = render_report("coastal", &start, &target, &summary);

    assert_eq!(report["status"], "no_path");
    assert_eq!(report["path"], serde_json::json!([]));
    assert_eq!(report["path_cost"], serde_json::Value::Null);
    assert_eq!(report["examined_node_count"], 3);
}
