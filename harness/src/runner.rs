//! Harness runner: drives a search session the way a host loop would.
//!
//! The core exposes "process up to N nodes" precisely so a cooperative host
//! (a render/update loop) can time-slice a search without threads. The
//! runner packages that drive loop and summarizes the terminal state.

use std::hash::Hash;

use wayfind_core::pathfinder::{Pathfinder, SearchStatus};

/// Summary of a driven search session.
#[derive(Debug, Clone)]
pub struct RunSummary<V> {
    /// Number of `process_nodes` calls made. Zero if the session was
    /// already complete when the runner was invoked.
    pub ticks: u64,
    /// Total nodes examined across the whole session.
    pub examined_node_count: u64,
    /// Terminal state of the session.
    pub status: SearchStatus,
    /// The found path in start→target order; empty on `NoPath`.
    pub path: Vec<V>,
    /// Total accumulated cost of the found path.
    pub path_cost: Option<f32>,
}

/// Runner misuse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    /// `nodes_per_tick` was zero: the drive loop could never progress.
    ZeroNodesPerTick,
}

impl std::fmt::Display for RunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroNodesPerTick => write!(f, "nodes_per_tick must be at least 1"),
        }
    }
}

impl std::error::Error for RunnerError {}

/// Drive a session to completion in slices of `nodes_per_tick`
/// examinations, one `process_nodes` call per tick.
///
/// # Errors
///
/// Returns [`RunnerError::ZeroNodesPerTick`] if `nodes_per_tick` is zero.
pub fn run_sliced<V: Clone + Eq + Hash>(
    pathfinder: &mut Pathfinder<'_, V>,
    nodes_per_tick: u64,
) -> Result<RunSummary<V>, RunnerError> {
    if nodes_per_tick == 0 {
        return Err(RunnerError::ZeroNodesPerTick);
    }

    let mut ticks = 0;
    while !pathfinder.is_complete() {
        pathfinder.process_nodes(nodes_per_tick);
        ticks += 1;
    }
    Ok(summarize(pathfinder, ticks))
}

/// Drive a session to completion eagerly.
pub fn run_to_completion<V: Clone + Eq + Hash>(
    pathfinder: &mut Pathfinder<'_, V>,
) -> RunSummary<V> {
    let ticks = u64::from(!pathfinder.is_complete());
    pathfinder.process_to_completion();
    summarize(pathfinder, ticks)
}

fn summarize<V: Clone + Eq + Hash>(
    pathfinder: &Pathfinder<'_, V>,
    ticks: u64,
) -> RunSummary<V> {
    RunSummary {
        ticks,
        examined_node_count: pathfinder.examined_node_count(),
        status: pathfinder.status(),
        path: pathfinder.path().to_vec(),
        path_cost: pathfinder.path_cost(),
    }
}
