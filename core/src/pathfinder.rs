//! The search session: seed, expand, terminate.
//!
//! A [`Pathfinder`] computes one path for one fixed `(start, target)` pair.
//! It is single-threaded and non-blocking; the "process up to N nodes"
//! entry point exists so a host with a cooperative scheduling model (a
//! render/update loop, say) can time-slice the search by calling it once
//! per tick. A session left `Running` can be abandoned or resumed at will —
//! all state is self-contained.

use std::collections::HashSet;
use std::hash::Hash;

use crate::contract::NodeProvider;
use crate::frontier::Frontier;
use crate::node::{Node, ScoredNode};

/// Session state. Terminal states are absorbing: no operation leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The frontier still holds unexamined nodes; the target has not been
    /// popped.
    Running,
    /// The target was popped; the path is available.
    PathFound,
    /// The frontier emptied without popping the target. This is a normal
    /// terminal outcome, not an error.
    NoPath,
}

impl SearchStatus {
    /// Whether the session has reached a terminal state.
    #[must_use]
    pub fn is_complete(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Reconstruct the start→terminal value sequence by walking the parent
/// chain from a terminal node back to the start.
#[must_use]
pub fn reconstruct_path<V: Clone>(terminal: &Node<V>) -> Vec<V> {
    let mut path = Vec::new();
    let mut current = Some(terminal);
    while let Some(node) = current {
        path.push(node.value().clone());
        current = node.parent();
    }
    path.reverse();
    path
}

/// An incremental A* search session over a provider-supplied graph.
pub struct Pathfinder<'p, V> {
    provider: &'p dyn NodeProvider<V>,
    target: V,
    frontier: Frontier<V>,
    examined_values: HashSet<V>,
    path: Vec<V>,
    path_cost: Option<f32>,
    status: SearchStatus,
    examined_node_count: u64,
}

impl<'p, V: Clone + Eq + Hash> Pathfinder<'p, V> {
    /// Create a session for one `(start, target)` pair and seed the
    /// frontier with the start node.
    ///
    /// Internal structures are pre-sized from the provider's
    /// [`NodeProvider::node_count`] hint.
    pub fn new(provider: &'p dyn NodeProvider<V>, start: V, target: V) -> Self {
        let capacity = provider.node_count();
        let mut frontier = Frontier::with_capacity(capacity);

        let start_heuristic = provider.min_distance_to_target(&start, &target);
        debug_assert!(
            start_heuristic >= 0.0,
            "heuristic must be non-negative, got {start_heuristic}"
        );
        frontier.insert_if_better(ScoredNode::for_start(start, start_heuristic));

        Self {
            provider,
            target,
            frontier,
            examined_values: HashSet::with_capacity(capacity),
            path: Vec::new(),
            path_cost: None,
            status: SearchStatus::Running,
            examined_node_count: 0,
        }
    }

    /// Run at most `limit` node examinations, stopping early on
    /// completion. Safe no-op on an already-complete session; `limit == 0`
    /// never mutates state.
    pub fn process_nodes(&mut self, limit: u64) {
        if self.status.is_complete() {
            return;
        }
        for _ in 0..limit {
            if self.process_best_node() {
                return;
            }
        }
    }

    /// Run node examinations until the session reaches a terminal state.
    pub fn process_to_completion(&mut self) {
        while !self.status.is_complete() {
            let _ = self.process_best_node();
        }
    }

    /// Examine the best frontier node. Returns `true` once the session is
    /// complete (path found, or frontier exhausted with no path).
    fn process_best_node(&mut self) -> bool {
        let Some(examined) = self.frontier.take_best() else {
            // Out of options: every value reachable from start has been
            // examined without popping the target.
            self.status = SearchStatus::NoPath;
            return true;
        };

        self.examined_node_count += 1;

        if *examined.value() == self.target {
            self.path = reconstruct_path(&examined);
            self.path_cost = Some(examined.distance_from_start());
            self.status = SearchStatus::PathFound;
            return true;
        }

        self.examined_values.insert(examined.value().clone());

        for adjacent in self.provider.adjacent_nodes(&examined) {
            if self.examined_values.contains(adjacent.value()) {
                continue;
            }
            let heuristic = self
                .provider
                .min_distance_to_target(adjacent.value(), &self.target);
            debug_assert!(
                heuristic >= 0.0,
                "heuristic must be non-negative, got {heuristic}"
            );
            self.frontier.insert_if_better(ScoredNode::new(adjacent, heuristic));
        }

        false
    }

    /// Current session state.
    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Whether the session has reached a terminal state.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Whether the session is complete *and* a path was found.
    #[must_use]
    pub fn path_found(&self) -> bool {
        self.status == SearchStatus::PathFound
    }

    /// The found path in start→target order; empty until (and unless) the
    /// session completes with a path.
    #[must_use]
    pub fn path(&self) -> &[V] {
        &self.path
    }

    /// Total accumulated cost of the found path, if one was found.
    #[must_use]
    pub fn path_cost(&self) -> Option<f32> {
        self.path_cost
    }

    /// Number of nodes popped from the frontier so far. Increases by
    /// exactly one per examination, including the one that completes the
    /// session. Populated on `NoPath` too (diagnostics).
    #[must_use]
    pub fn examined_node_count(&self) -> u64 {
        self.examined_node_count
    }
}
