//! `RouteNetwork`: a weighted route graph over named stops.
//!
//! Stops carry planar coordinates; the heuristic is straight-line distance,
//! which stays admissible as long as every leg costs at least the straight
//! line between its endpoints (`add_leg` asserts this in debug builds).

use std::collections::HashMap;

use wayfind_core::contract::NodeProvider;
use wayfind_core::node::Node;

/// Named stops with coordinates, connected by directed weighted legs.
#[derive(Default)]
pub struct RouteNetwork {
    positions: HashMap<String, (f32, f32)>,
    legs: HashMap<String, Vec<(String, f32)>>,
}

impl RouteNetwork {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop at planar coordinates.
    pub fn add_stop(&mut self, name: &str, x: f32, y: f32) {
        self.positions.insert(name.to_string(), (x, y));
    }

    /// Add a directed leg. Both stops must already be registered, and the
    /// cost must be at least the straight-line distance between them (the
    /// heuristic's admissibility depends on it).
    pub fn add_leg(&mut self, from: &str, to: &str, cost: f32) {
        debug_assert!(
            self.positions.contains_key(from) && self.positions.contains_key(to),
            "legs may only connect registered stops"
        );
        debug_assert!(
            cost >= self.straight_line(from, to),
            "leg cost below straight-line distance breaks admissibility"
        );
        self.legs
            .entry(from.to_string())
            .or_default()
            .push((to.to_string(), cost));
    }

    /// Add legs in both directions at the same cost.
    pub fn add_two_way_leg(&mut self, a: &str, b: &str, cost: f32) {
        self.add_leg(a, b, cost);
        self.add_leg(b, a, cost);
    }

    fn straight_line(&self, a: &str, b: &str) -> f32 {
        match (self.positions.get(a), self.positions.get(b)) {
            (Some(&(ax, ay)), Some(&(bx, by))) => {
                let dx = ax - bx;
                let dy = ay - by;
                (dx * dx + dy * dy).sqrt()
            }
            _ => 0.0,
        }
    }
}

impl NodeProvider<String> for RouteNetwork {
    fn adjacent_nodes(&self, node: &Node<String>) -> Vec<Node<String>> {
        self.legs
            .get(node.value())
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|(to, cost)| node.successor(to.clone(), *cost))
            .collect()
    }

    fn min_distance_to_target(&self, value: &String, target: &String) -> f32 {
        self.straight_line(value, target)
    }

    fn node_count(&self) -> usize {
        self.positions.len()
    }
}
