//! Node provider contract trait.

use crate::node::Node;

/// The engine's sole external boundary: a supplier of adjacency
/// information, heuristic distance estimates, and a sizing hint.
///
/// # Contract
///
/// - `adjacent_nodes` must be deterministic and side-effect-free with
///   respect to search state: same node, same neighbors. Step costs must be
///   non-negative and baked in via [`Node::successor`].
/// - `min_distance_to_target` must be admissible under the provider's own
///   movement rules (never overestimate the true remaining cost),
///   non-negative, and zero when `value == target`.
/// - Violating either contract is a caller bug; the engine asserts in debug
///   builds and does not attempt to repair inconsistent input.
pub trait NodeProvider<V> {
    /// Freshly constructed candidate nodes for every neighbor of an
    /// examined node, each discovered through `node` with its step cost
    /// accumulated. May be empty (dead end).
    fn adjacent_nodes(&self, node: &Node<V>) -> Vec<Node<V>>;

    /// Obstacle-free distance estimate from `value` to `target`, factoring
    /// in movement rules (grid movement, road topology, ...).
    fn min_distance_to_target(&self, value: &V, target: &V) -> f32;

    /// Total number of values in the graph. Used only to pre-size the
    /// engine's internal structures; a wrong count never affects
    /// correctness.
    fn node_count(&self) -> usize;
}
